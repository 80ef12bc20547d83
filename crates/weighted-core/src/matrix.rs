//! Row-major rectangular matrix
//!
//! Rows are stored contiguously. The rectangular invariant is checked once
//! at construction, so every row handed out by [`Matrix::row`] has exactly
//! [`Matrix::n_cols`] elements.

use crate::{Error, Numeric, Result};

/// Rectangular, row-major table of numeric values
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Numeric = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Numeric> Matrix<T> {
    /// Build a matrix from contiguous row-major data
    ///
    /// # Errors
    /// `LengthMismatch` when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(Error::length_mismatch(expected, data.len(), "matrix data"));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a sequence of rows
    ///
    /// The first row fixes the width. An empty input gives a `0x0` matrix.
    ///
    /// # Errors
    /// `ShapeMismatch` naming the first ragged row.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::shape_mismatch(cols, row.len(), format!("row {i}")));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// All-zero matrix
    ///
    /// # Errors
    /// `InvalidParameter` when `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow row `i`
    ///
    /// # Panics
    /// Panics if `i >= n_rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Element at `(i, j)`, or `None` when out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Iterate rows in order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Copy of column `j`
    pub fn column(&self, j: usize) -> Option<Vec<T>> {
        if j >= self.cols {
            return None;
        }
        Some(self.rows().map(|row| row[j]).collect())
    }

    /// Row-major view of the underlying storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Return a new matrix with `column` appended after the last column
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    /// `LengthMismatch` when `column.len() != n_rows()`.
    pub fn append_column(&self, column: &[T]) -> Result<Self> {
        if column.len() != self.rows {
            return Err(Error::length_mismatch(
                self.rows,
                column.len(),
                "appended column",
            ));
        }

        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for (row, &value) in self.rows().zip(column) {
            data.extend_from_slice(row);
            data.push(value);
        }

        Ok(Self {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Split back into owned rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

/// Number of elements in a `rows x cols` matrix, checked for overflow
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| Error::InvalidParameter(format!("{rows}x{cols} overflows usize")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate() -> Matrix<f64> {
        Matrix::from_rows(&[
            [73.0, 67.0, 43.0],
            [91.0, 88.0, 64.0],
            [87.0, 134.0, 58.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_shape() {
        let m = climate();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.row(1), &[91.0, 88.0, 64.0]);
        assert_eq!(m.get(2, 1), Some(134.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.column(2), Some(vec![43.0, 64.0, 58.0]));
        assert_eq!(m.column(3), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        match Matrix::from_rows(&rows) {
            Err(Error::ShapeMismatch {
                expected,
                actual,
                context,
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
                assert_eq!(context, "row 1");
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_from_vec_validates_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(Error::LengthMismatch { expected: 4, actual: 3, .. })
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let m = Matrix::from_rows(&rows).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn test_append_column() {
        let m = climate();
        let augmented = m.append_column(&[56.8, 76.9, 81.9]).unwrap();

        assert_eq!(augmented.shape(), (3, 4));
        assert_eq!(augmented.row(0), &[73.0, 67.0, 43.0, 56.8]);
        assert_eq!(augmented.row(2), &[87.0, 134.0, 58.0, 81.9]);
        // input untouched
        assert_eq!(m.shape(), (3, 3));
    }

    #[test]
    fn test_append_column_length_mismatch() {
        let m = climate();
        assert!(matches!(
            m.append_column(&[1.0, 2.0]),
            Err(Error::LengthMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_zeros_and_to_rows() {
        let m = Matrix::<i32>::zeros(2, 3).unwrap();
        assert_eq!(m.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_oversized_shapes_are_rejected() {
        assert!(matches!(
            Matrix::<f64>::zeros(usize::MAX, 2),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Matrix::<f64>::from_vec(usize::MAX, 3, Vec::new()),
            Err(Error::InvalidParameter(_))
        ));
    }
}
