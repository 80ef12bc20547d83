//! Named columns over a numeric matrix

use crate::{Error, Result};
use tracing::debug;
use weighted_core::{batch_weighted_sum, Matrix};

/// Header row plus numeric body
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    data: Matrix<f64>,
}

impl Table {
    /// Pair headers with a matrix
    ///
    /// # Errors
    /// `ShapeMismatch` when the header count differs from the column count.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>, data: Matrix<f64>) -> Result<Self> {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.len() != data.n_cols() {
            return Err(weighted_core::Error::shape_mismatch(
                data.n_cols(),
                headers.len(),
                "table headers",
            )
            .into());
        }
        Ok(Self { headers, data })
    }

    /// A table whose columns are named `column_0`, `column_1`, ...
    pub fn with_default_headers(data: Matrix<f64>) -> Self {
        let headers = (0..data.n_cols()).map(|j| format!("column_{j}")).collect();
        Self { headers, data }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn data(&self) -> &Matrix<f64> {
        &self.data
    }

    pub fn into_parts(self) -> (Vec<String>, Matrix<f64>) {
        (self.headers, self.data)
    }

    pub fn n_rows(&self) -> usize {
        self.data.n_rows()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of the named column
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        self.column_index(name)
            .and_then(|j| self.data.column(j))
            .ok_or_else(|| Error::InvalidColumn(name.to_string()))
    }

    /// New table holding only `names`, in the order given
    pub fn select(&self, names: &[String]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| Error::InvalidColumn(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut data = Vec::with_capacity(self.n_rows() * indices.len());
        for row in self.data.rows() {
            data.extend(indices.iter().map(|&j| row[j]));
        }

        Ok(Table {
            headers: names.to_vec(),
            data: Matrix::from_vec(self.n_rows(), indices.len(), data)?,
        })
    }

    /// Weighted sum of each row
    pub fn weighted_rows(&self, weights: &[f64]) -> Result<Vec<f64>> {
        Ok(batch_weighted_sum(&self.data, weights)?)
    }

    /// Return a new table with `values` appended as column `name`
    ///
    /// # Errors
    /// `LengthMismatch` when `values.len()` differs from the row count.
    pub fn with_column(&self, name: impl Into<String>, values: &[f64]) -> Result<Table> {
        let name = name.into();
        let data = self.data.append_column(values)?;
        debug!(column = %name, rows = data.n_rows(), "appended column");

        let mut headers = self.headers.clone();
        headers.push(name);
        Ok(Table { headers, data })
    }
}
