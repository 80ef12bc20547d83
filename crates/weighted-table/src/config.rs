//! Configuration types for reading, deriving and writing tables

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Delimited-text layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Field separator, a single ASCII character
    pub delimiter: char,
    /// Decimal digits written per value
    pub precision: usize,
    /// Whether the first line names the columns
    pub has_headers: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 2,
            has_headers: true,
        }
    }
}

impl TableConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// The delimiter as the byte the CSV layer expects
    ///
    /// # Errors
    /// `InvalidParameter` for non-ASCII delimiters and for characters that
    /// would collide with quoting or line breaks.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter {
            '"' | '\n' | '\r' => Err(Error::InvalidParameter(format!(
                "delimiter {:?} collides with CSV syntax",
                self.delimiter
            ))),
            c if c.is_ascii() => Ok(c as u8),
            c => Err(Error::InvalidParameter(format!(
                "delimiter {c:?} is not a single ASCII character"
            ))),
        }
    }
}

/// A column computed as the weighted sum of other columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivedColumnConfig {
    /// Header of the appended column
    pub name: String,
    /// One weight per source column
    pub weights: Vec<f64>,
    /// Source columns by header, in weight order. `None` uses every column.
    pub source_columns: Option<Vec<String>>,
}

impl Default for DerivedColumnConfig {
    fn default() -> Self {
        Self {
            name: "result".to_string(),
            weights: Vec::new(),
            source_columns: None,
        }
    }
}

impl DerivedColumnConfig {
    pub fn new(name: impl Into<String>, weights: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            weights,
            source_columns: None,
        }
    }

    pub fn with_source_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.source_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

/// Everything needed to turn an input table into an augmented output table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub table: TableConfig,
    pub derived: DerivedColumnConfig,
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.table.delimiter_byte()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
