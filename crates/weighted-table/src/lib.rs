//! Delimited-text tables with weighted-sum derived columns
//!
//! Reads a header line plus numeric rows, appends a column computed as the
//! weighted sum of existing columns, and writes the result with a fixed
//! number of decimals.
//!
//! # Example
//!
//! ```rust
//! use weighted_table::{parse_delimited, to_delimited_string, TableConfig};
//!
//! let config = TableConfig::default();
//! let climate = parse_delimited("temperature,rainfall,humidity\n73,67,43\n", &config).unwrap();
//! let yields = climate.weighted_rows(&[0.3, 0.2, 0.5]).unwrap();
//! let augmented = climate.with_column("yield_apple", &yields).unwrap();
//!
//! assert_eq!(
//!     to_delimited_string(&augmented, &config).unwrap(),
//!     "temperature,rainfall,humidity,yield_apple\n73.00,67.00,43.00,56.80\n"
//! );
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod table;
pub mod writer;

pub use config::{DerivedColumnConfig, PipelineConfig, TableConfig};
pub use error::{Error, Result};
pub use pipeline::{derive_column, run};
pub use reader::{parse_delimited, read_from, read_table};
pub use table::Table;
pub use writer::{serialize_delimited, to_delimited_string, write_table, write_to};
