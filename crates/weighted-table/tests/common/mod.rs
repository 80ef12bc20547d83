//! Shared fixtures for table integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use std::path::{Path, PathBuf};

/// Climate readings for five regions with a header line
pub const CLIMATE_CSV: &str = "temperature,rainfall,humidity\n\
                               73,67,43\n\
                               91,88,64\n\
                               87,134,58\n\
                               102,43,37\n\
                               69,96,70\n";

/// Crop-yield weights for temperature, rainfall and humidity
pub const YIELD_WEIGHTS: [f64; 3] = [0.3, 0.2, 0.5];

/// Expected apple yields for [`CLIMATE_CSV`], as written with two decimals
pub const EXPECTED_YIELDS: [&str; 5] = ["56.80", "76.90", "81.90", "57.70", "74.90"];

/// Write `contents` to `name` inside `dir` and return the full path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Last field of every data line
pub fn last_column(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap_or_default().to_string())
        .collect()
}
