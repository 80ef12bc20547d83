//! Read a table, append a weighted-sum column, write it back

use crate::config::{DerivedColumnConfig, PipelineConfig};
use crate::{read_table, write_table, Result, Table};
use std::path::Path;
use tracing::{info, instrument};

/// Append the column described by `derived` to `table`
///
/// Source columns are looked up by header when listed, otherwise every
/// column feeds the weighted sum in table order.
///
/// # Errors
/// `InvalidColumn` for unknown source headers, `ShapeMismatch` when the
/// weight count differs from the number of source columns.
pub fn derive_column(table: &Table, derived: &DerivedColumnConfig) -> Result<Table> {
    let values = match &derived.source_columns {
        Some(columns) => table.select(columns)?.weighted_rows(&derived.weights)?,
        None => table.weighted_rows(&derived.weights)?,
    };
    table.with_column(derived.name.clone(), &values)
}

/// Load `input`, derive the configured column, and save to `output`
///
/// Returns the augmented table.
#[instrument(skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>, config: &PipelineConfig) -> Result<Table> {
    let table = read_table(input, &config.table)?;
    let augmented = derive_column(&table, &config.derived)?;
    write_table(output, &augmented, &config.table)?;

    info!(
        rows = augmented.n_rows(),
        column = %config.derived.name,
        "derived column written"
    );
    Ok(augmented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weighted_core::Matrix;

    fn climate() -> Table {
        let data = Matrix::from_rows(&[[73.0, 67.0, 43.0], [91.0, 88.0, 64.0]]).unwrap();
        Table::new(["temperature", "rainfall", "humidity"], data).unwrap()
    }

    #[test]
    fn test_derive_all_columns() {
        let derived = DerivedColumnConfig::new("yield_apple", vec![0.3, 0.2, 0.5]);
        let table = derive_column(&climate(), &derived).unwrap();
        assert_eq!(table.column("yield_apple").unwrap().len(), 2);
        assert!((table.column("yield_apple").unwrap()[1] - 76.9).abs() < 1e-9);
    }

    #[test]
    fn test_derive_selected_columns() {
        let derived = DerivedColumnConfig::new("heat_index", vec![1.0, 0.5])
            .with_source_columns(["temperature", "humidity"]);
        let table = derive_column(&climate(), &derived).unwrap();
        assert_eq!(table.column("heat_index").unwrap(), vec![94.5, 123.0]);
    }

    #[test]
    fn test_derive_unknown_column() {
        let derived = DerivedColumnConfig::new("x", vec![1.0]).with_source_columns(["wind"]);
        assert!(matches!(
            derive_column(&climate(), &derived),
            Err(crate::Error::InvalidColumn(_))
        ));
    }

    #[test]
    fn test_derive_wrong_weight_count() {
        let derived = DerivedColumnConfig::new("x", vec![1.0, 2.0]);
        assert!(matches!(
            derive_column(&climate(), &derived),
            Err(crate::Error::Core(weighted_core::Error::ShapeMismatch { .. }))
        ));
    }
}
