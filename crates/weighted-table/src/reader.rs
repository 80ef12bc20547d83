//! Delimited-text table reader
//!
//! Every data row must carry exactly as many numeric fields as the header
//! (or, without headers, the first row). Short rows, empty fields,
//! non-numeric text and non-finite values (`NaN`, `inf`) are reported as
//! `MalformedInput` with the 1-based line number; nothing is skipped or
//! defaulted.

use crate::{Error, Result, Table, TableConfig};
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};
use weighted_core::Matrix;

/// Parse a table held in memory
pub fn parse_delimited(text: &str, config: &TableConfig) -> Result<Table> {
    read_from(text.as_bytes(), config)
}

/// Read a table from a file
///
/// # Errors
/// `Io` with the path when the file cannot be opened or read.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_table(path: impl AsRef<Path>, config: &TableConfig) -> Result<Table> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    read_from(std::io::BufReader::new(file), config).map_err(|e| e.with_path(path))
}

/// Read a table from any byte source
pub fn read_from<R: Read>(source: R, config: &TableConfig) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(config.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = if config.has_headers {
        let headers = reader.headers().map_err(malformed_from_csv)?.clone();
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(Error::malformed(1, "missing header line"));
        }
        Some(headers.iter().map(str::to_string).collect::<Vec<_>>())
    } else {
        None
    };

    let mut width = headers.as_ref().map(Vec::len);
    let mut data = Vec::new();
    let mut rows = 0usize;

    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(malformed_from_csv)? {
        let line = record.position().map_or(0, |p| p.line());
        let expected = *width.get_or_insert(record.len());

        if record.len() != expected {
            return Err(Error::malformed(
                line,
                format!("expected {expected} fields, found {}", record.len()),
            ));
        }

        for (j, field) in record.iter().enumerate() {
            data.push(parse_field(field, j, line)?);
        }
        rows += 1;
    }

    let cols = width.unwrap_or(0);
    let matrix = Matrix::from_vec(rows, cols, data)?;
    debug!(rows, cols, "parsed table");

    Ok(match headers {
        Some(headers) => Table::new(headers, matrix)?,
        None => Table::with_default_headers(matrix),
    })
}

fn malformed_from_csv(err: csv::Error) -> Error {
    match err.kind() {
        csv::ErrorKind::Utf8 { pos, err: utf8 } => {
            let line = pos.as_ref().map_or(0, |p| p.line());
            Error::malformed(line, format!("invalid UTF-8 ({utf8})"))
        }
        _ => Error::Csv(err),
    }
}

fn parse_field(field: &str, column: usize, line: u64) -> Result<f64> {
    if field.is_empty() {
        return Err(Error::malformed(
            line,
            format!("missing value in column {}", column + 1),
        ));
    }
    let value = field.parse::<f64>().map_err(|e| {
        Error::malformed(
            line,
            format!("column {}: {field:?} is not a number ({e})", column + 1),
        )
    })?;
    if !value.is_finite() {
        return Err(Error::malformed(
            line,
            format!("column {}: {field:?} is not a finite number", column + 1),
        ));
    }
    Ok(value)
}
