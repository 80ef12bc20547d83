//! Crop yields from regional climate readings
//!
//! Writes a small climate table, appends an apple-yield column computed as
//! a weighted sum of temperature, rainfall and humidity, then times a
//! one-million element dot product with an explicit loop and with the best
//! available backend.
//!
//! Run with: cargo run -p weighted-table --example crop_yields
//! Set RUST_LOG=debug to see per-step logging.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use weighted_core::{random_vector, timed_comparison, weighted_sum};
use weighted_table::{run, DerivedColumnConfig, PipelineConfig};

const CLIMATE: &str = "temperature,rainfall,humidity\n\
                       73,67,43\n\
                       91,88,64\n\
                       87,134,58\n\
                       102,43,37\n\
                       69,96,70\n";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let weights: [f64; 3] = [0.3, 0.2, 0.5];

    // Single region
    let kanto = weighted_sum(&[73.0, 67.0, 43.0], &weights)?;
    println!("Kanto apple yield: {kanto:.2}");

    // Whole table through files
    let dir = tempfile::tempdir().context("creating scratch directory")?;
    let input = dir.path().join("climate.csv");
    let output = dir.path().join("yields.csv");
    std::fs::write(&input, CLIMATE).context("writing climate table")?;

    let config = PipelineConfig {
        derived: DerivedColumnConfig::new("yield_apple", weights.to_vec()),
        ..Default::default()
    };
    run(&input, &output, &config)?;

    println!("\n{}", std::fs::read_to_string(&output).context("reading yields")?);

    // Loop versus bulk
    let a = random_vector(1_000_000, 42);
    let b = random_vector(1_000_000, 43);
    let timing = timed_comparison(&a, &b)?;

    println!("Dot product of two 1M vectors");
    println!("  loop: {:.6} in {:?}", timing.loop_result, timing.loop_elapsed);
    println!(
        "  bulk: {:.6} in {:?} ({})",
        timing.bulk_result, timing.bulk_elapsed, timing.backend
    );
    if let Some(speedup) = timing.speedup() {
        println!("  speedup: {speedup:.1}x");
    }

    Ok(())
}
