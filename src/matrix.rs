use std::fmt;

use log::{debug, trace};

use crate::error::{LResult, LinError};
use crate::row::Row;
use crate::scalar::Scalar;

/// An ordered sequence of equal-width [`Row`]s.
///
/// Cloning deep-copies every row, and every accessor that hands out a row
/// (`get`, `iter_rows`, `iter_cols`) hands out an owned copy, so no caller can
/// reach the matrix's storage except through `&mut self` methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    rows: Vec<Row>,
}

impl Matrix {
    /// Builds a matrix from raw rows or existing [`Row`]s.
    ///
    /// Fails with `RaggedRows` when any row's length differs from the first.
    pub fn new<I>(rows: I) -> LResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        let rows: Vec<Row> = rows.into_iter().map(Into::into).collect();
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows
                .iter()
                .map(Row::len)
                .enumerate()
                .find(|(_, len)| *len != expected)
            {
                debug!(
                    "rejecting ragged matrix: row {} has {} values, expected {}",
                    row, found, expected
                );
                return Err(LinError::RaggedRows {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// `(rows, width)`; `(0, 0)` when empty.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_width(&self, row: &Row) -> LResult<()> {
        match self.rows.first() {
            Some(first) if first.len() != row.len() => {
                debug!(
                    "rejecting row of width {}, matrix width is {}",
                    row.len(),
                    first.len()
                );
                Err(LinError::WidthMismatch {
                    expected: first.len(),
                    found: row.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Appends a row. An empty matrix takes the width of its first row.
    pub fn append<R: Into<Row>>(&mut self, row: R) -> LResult<()> {
        let row = row.into();
        self.check_width(&row)?;
        trace!("appending row {} of width {}", self.rows.len(), row.len());
        self.rows.push(row);
        Ok(())
    }

    /// Returns a copy of the row at `index`.
    pub fn get(&self, index: usize) -> LResult<Row> {
        self.rows
            .get(index)
            .cloned()
            .ok_or(LinError::OutOfRange {
                index,
                len: self.rows.len(),
            })
    }

    pub fn set<R: Into<Row>>(&mut self, index: usize, row: R) -> LResult<()> {
        if self.rows.is_empty() {
            return Err(LinError::NoRows);
        }
        let row = row.into();
        self.check_width(&row)?;
        let len = self.rows.len();
        let slot = self
            .rows
            .get_mut(index)
            .ok_or(LinError::OutOfRange { index, len })?;
        *slot = row;
        Ok(())
    }

    /// Removes and returns the row at `index`.
    pub fn delete(&mut self, index: usize) -> LResult<Row> {
        if index >= self.rows.len() {
            return Err(LinError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        trace!("deleting row {}", index);
        Ok(self.rows.remove(index))
    }

    pub fn element(&self, row: usize, col: usize) -> LResult<&Scalar> {
        self.rows
            .get(row)
            .ok_or(LinError::OutOfRange {
                index: row,
                len: self.rows.len(),
            })?
            .get(col)
    }

    pub fn iter_rows(&self) -> Rows<'_> {
        Rows {
            inner: self.rows.iter(),
        }
    }

    pub fn iter_cols(&self) -> Columns<'_> {
        Columns {
            rows: &self.rows,
            col: 0,
            ncols: self.ncols(),
        }
    }

    /// Rows become columns. A matrix of zero width transposes to `(0, 0)`.
    pub fn transpose(&self) -> Matrix {
        Matrix {
            rows: self.iter_cols().collect(),
        }
    }

    fn zip_rows<F>(&self, rhs: &Matrix, f: F) -> LResult<Matrix>
    where
        F: Fn(&Row, &Row) -> LResult<Row>,
    {
        if self.dimensions() != rhs.dimensions() {
            debug!(
                "rejecting elementwise op on matrices {:?} and {:?}",
                self.dimensions(),
                rhs.dimensions()
            );
            return Err(LinError::DimensionMismatch {
                left: self.dimensions(),
                right: rhs.dimensions(),
            });
        }
        if self.rows.is_empty() {
            return Ok(Matrix::empty());
        }
        self.rows
            .iter()
            .zip(rhs.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<LResult<Vec<_>>>()
            .map(|rows| Matrix { rows })
    }

    fn map_rows<F>(&self, f: F) -> LResult<Matrix>
    where
        F: Fn(&Row) -> LResult<Row>,
    {
        self.rows
            .iter()
            .map(f)
            .collect::<LResult<Vec<_>>>()
            .map(|rows| Matrix { rows })
    }

    pub fn try_add(&self, rhs: &Matrix) -> LResult<Matrix> {
        self.zip_rows(rhs, Row::try_add)
    }

    pub fn try_sub(&self, rhs: &Matrix) -> LResult<Matrix> {
        self.zip_rows(rhs, Row::try_sub)
    }

    pub fn try_neg(&self) -> LResult<Matrix> {
        self.map_rows(Row::try_neg)
    }

    pub fn scale<S: Into<Scalar>>(&self, s: S) -> LResult<Matrix> {
        let s = s.into();
        self.map_rows(|row| row.scale(s))
    }

    pub fn floor_div<S: Into<Scalar>>(&self, s: S) -> LResult<Matrix> {
        let s = s.into();
        self.map_rows(|row| row.floor_div(s))
    }

    pub fn true_div<S: Into<Scalar>>(&self, s: S) -> LResult<Matrix> {
        let s = s.into();
        self.map_rows(|row| row.true_div(s))
    }
}

impl_binary_op!(Matrix, Add, add, try_add);
impl_binary_op!(Matrix, Sub, sub, try_sub);
impl_scalar_op!(Matrix, Mul, mul, scale);
impl_scalar_op!(Matrix, Div, div, true_div);
impl_reflected_div!(Matrix; Scalar, i64, f64);
impl_neg!(Matrix);

impl From<&Matrix> for Matrix {
    fn from(m: &Matrix) -> Self {
        m.clone()
    }
}

impl<T: Into<Scalar>> TryFrom<Vec<Vec<T>>> for Matrix {
    type Error = LinError;

    fn try_from(rows: Vec<Vec<T>>) -> LResult<Self> {
        Matrix::new(rows)
    }
}

impl PartialEq<Matrix> for Row {
    fn eq(&self, _: &Matrix) -> bool {
        false
    }
}

impl PartialEq<Row> for Matrix {
    fn eq(&self, _: &Row) -> bool {
        false
    }
}

/// Row copies in storage order. See [`Matrix::iter_rows`].
pub struct Rows<'a> {
    inner: std::slice::Iter<'a, Row>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row;

    #[inline]
    fn next(&mut self) -> Option<Row> {
        self.inner.next().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

/// One [`Row`] per column, built by picking that column from every row.
pub struct Columns<'a> {
    rows: &'a [Row],
    col: usize,
    ncols: usize,
}

impl<'a> Iterator for Columns<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.rows.is_empty() || self.col >= self.ncols {
            return None;
        }
        let col = self.col;
        self.col += 1;
        Some(self.rows.iter().map(|row| row[col]).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.rows.is_empty() {
            0
        } else {
            self.ncols - self.col
        };
        (n, Some(n))
    }
}

impl<'a> ExactSizeIterator for Columns<'a> {}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        let mut widths = vec![0usize; self.ncols()];
        for row in cells.iter() {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.chars().count());
            }
        }
        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("│")?;
            for (cell, w) in row.iter().zip(widths.iter()) {
                write!(f, " {:<width$} ", cell, width = *w)?;
            }
            f.write_str("│")?;
        }
        Ok(())
    }
}
