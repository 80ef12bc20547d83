//! Delimited-text table writer
//!
//! Output is a header line followed by one line per row, every value
//! formatted to a fixed number of decimals. No comment or prefix lines are
//! emitted, so the result reads back with [`crate::parse_delimited`].

use crate::{Error, Result, Table, TableConfig};
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};
use weighted_core::Matrix;

/// Render `matrix` under `headers` as comma-separated text
///
/// ```rust
/// use weighted_core::Matrix;
/// use weighted_table::serialize_delimited;
///
/// let m = Matrix::from_rows(&[[73.0, 67.0, 43.0, 56.8]]).unwrap();
/// let text = serialize_delimited(&m, &["temperature", "rainfall", "humidity", "yield_apple"], 2).unwrap();
/// assert_eq!(text, "temperature,rainfall,humidity,yield_apple\n73.00,67.00,43.00,56.80\n");
/// ```
///
/// # Errors
/// `ShapeMismatch` when the header count differs from the column count.
pub fn serialize_delimited<S: AsRef<str>>(
    matrix: &Matrix<f64>,
    headers: &[S],
    precision: usize,
) -> Result<String> {
    let config = TableConfig::default().with_precision(precision);
    let table = Table::new(headers.iter().map(|h| h.as_ref().to_string()), matrix.clone())?;
    to_delimited_string(&table, &config)
}

/// Render a table with the given layout
pub fn to_delimited_string(table: &Table, config: &TableConfig) -> Result<String> {
    let bytes = write_to(Vec::new(), table, config)?;
    String::from_utf8(bytes)
        .map_err(|e| Error::InvalidParameter(format!("rendered table is not UTF-8: {e}")))
}

/// Write a table to `path`, replacing any existing file
///
/// The file handle is closed on every return path, including formatting
/// failures part way through.
///
/// # Errors
/// `Io` with the path when the destination cannot be created or written.
#[instrument(skip_all, fields(path = %path.as_ref().display(), rows = table.n_rows()))]
pub fn write_table(path: impl AsRef<Path>, table: &Table, config: &TableConfig) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut sink = write_to(std::io::BufWriter::new(file), table, config).map_err(|e| e.with_path(path))?;
    sink.flush().map_err(|e| Error::io(path, e))?;
    debug!("table written");
    Ok(())
}

/// Write a table to any byte sink and hand the sink back
pub fn write_to<W: Write>(sink: W, table: &Table, config: &TableConfig) -> Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(false)
        .from_writer(sink);

    if config.has_headers {
        writer.write_record(table.headers())?;
    }

    let precision = config.precision;
    let mut fields: Vec<String> = Vec::with_capacity(table.data().n_cols());
    for row in table.data().rows() {
        fields.clear();
        fields.extend(row.iter().map(|value| format!("{value:.precision$}")));
        writer.write_record(&fields)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_delimited;

    fn augmented() -> Table {
        let data = Matrix::from_rows(&[
            [73.0, 67.0, 43.0, 56.8],
            [91.0, 88.0, 64.0, 76.9],
            [87.0, 134.0, 58.0, 81.9],
        ])
        .unwrap();
        Table::new(["temperature", "rainfall", "humidity", "yield_apple"], data).unwrap()
    }

    #[test]
    fn test_serialize_precision() {
        let (headers, data) = augmented().into_parts();
        let text = serialize_delimited(&data, &headers, 2).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "temperature,rainfall,humidity,yield_apple");
        assert_eq!(lines[1], "73.00,67.00,43.00,56.80");
        assert_eq!(lines[3], "87.00,134.00,58.00,81.90");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_zero_precision_rounds() {
        let data = Matrix::from_rows(&[[1.4, 2.6]]).unwrap();
        let text = serialize_delimited(&data, &["a", "b"], 0).unwrap();
        assert_eq!(text, "a,b\n1,3\n");
    }

    #[test]
    fn test_header_mismatch() {
        let data = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let err = serialize_delimited(&data, &["a"], 2).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(weighted_core::Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let table = augmented();
        let config = TableConfig::default();
        let text = to_delimited_string(&table, &config).unwrap();
        assert_eq!(parse_delimited(&text, &config).unwrap(), table);
    }

    #[test]
    fn test_tab_delimited_without_header() {
        let config = TableConfig::default()
            .with_delimiter('\t')
            .with_headers(false)
            .with_precision(1);
        let text = to_delimited_string(&augmented(), &config).unwrap();
        assert!(text.starts_with("73.0\t67.0\t43.0\t56.8\n"));
    }

    #[test]
    fn test_unwritable_destination() {
        let err = write_table("/definitely/not/a/dir/out.csv", &augmented(), &TableConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
