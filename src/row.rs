use std::fmt;
use std::ops::{Index, IndexMut};

use log::debug;

use crate::error::{LResult, LinError};
use crate::scalar::Scalar;

/// A fixed-length sequence of [`Scalar`] values.
///
/// A `Row` owns its values exclusively, so a clone never aliases the
/// original. Arithmetic never mutates an operand and returns a new `Row`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    vals: Vec<Scalar>,
}

impl Row {
    pub fn new<I>(vals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        Self {
            vals: vals.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { vals: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn get(&self, index: usize) -> LResult<&Scalar> {
        self.vals.get(index).ok_or(LinError::OutOfRange {
            index,
            len: self.vals.len(),
        })
    }

    /// Replaces the value at `index`. The length never changes.
    pub fn set<S: Into<Scalar>>(&mut self, index: usize, value: S) -> LResult<()> {
        let len = self.vals.len();
        let slot = self
            .vals
            .get_mut(index)
            .ok_or(LinError::OutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.vals.iter()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.vals
    }

    pub fn to_vec(&self) -> Vec<Scalar> {
        self.vals.clone()
    }

    fn zip_with<F>(&self, rhs: &Row, f: F) -> LResult<Row>
    where
        F: Fn(Scalar, Scalar) -> LResult<Scalar>,
    {
        if self.len() != rhs.len() {
            debug!(
                "rejecting elementwise op on rows of length {} and {}",
                self.len(),
                rhs.len()
            );
            return Err(LinError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        self.vals
            .iter()
            .zip(rhs.vals.iter())
            .map(|(a, b)| f(*a, *b))
            .collect::<LResult<Vec<_>>>()
            .map(|vals| Row { vals })
    }

    fn map_scalar<F>(&self, f: F) -> LResult<Row>
    where
        F: Fn(Scalar) -> LResult<Scalar>,
    {
        self.vals
            .iter()
            .map(|v| f(*v))
            .collect::<LResult<Vec<_>>>()
            .map(|vals| Row { vals })
    }

    pub fn try_add(&self, rhs: &Row) -> LResult<Row> {
        self.zip_with(rhs, Scalar::try_add)
    }

    pub fn try_sub(&self, rhs: &Row) -> LResult<Row> {
        self.zip_with(rhs, Scalar::try_sub)
    }

    pub fn try_neg(&self) -> LResult<Row> {
        self.map_scalar(Scalar::try_neg)
    }

    pub fn scale<S: Into<Scalar>>(&self, s: S) -> LResult<Row> {
        let s = s.into();
        self.map_scalar(|v| v.try_mul(s))
    }

    /// Floor-divides every element by `s`.
    pub fn floor_div<S: Into<Scalar>>(&self, s: S) -> LResult<Row> {
        let s = s.into();
        self.map_scalar(|v| v.floor_div(s))
    }

    /// Divides every element by `s`; int elements divided by an int become
    /// floats.
    pub fn true_div<S: Into<Scalar>>(&self, s: S) -> LResult<Row> {
        let s = s.into();
        self.map_scalar(|v| v.true_div(s))
    }
}

impl Scalar {
    /// Reflected floor division: `self` is the divisor of every element of
    /// `row`, not the dividend. Same result as `row.floor_div(self)`.
    pub fn floor_div_row(self, row: &Row) -> LResult<Row> {
        row.floor_div(self)
    }
}

impl_binary_op!(Row, Add, add, try_add);
impl_binary_op!(Row, Sub, sub, try_sub);
impl_scalar_op!(Row, Mul, mul, scale);
impl_scalar_op!(Row, Div, div, true_div);
impl_reflected_div!(Row; Scalar, i64, f64);
impl_neg!(Row);

impl Index<usize> for Row {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.vals[index]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        &mut self.vals[index]
    }
}

impl From<&Row> for Row {
    fn from(row: &Row) -> Self {
        row.clone()
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Row {
    fn from(vals: Vec<T>) -> Self {
        Row::new(vals)
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for Row {
    fn from(vals: [T; N]) -> Self {
        Row::new(vals)
    }
}

impl<T: Into<Scalar> + Clone> From<&[T]> for Row {
    fn from(vals: &[T]) -> Self {
        Row::new(vals.iter().cloned())
    }
}

impl<S: Into<Scalar>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::new(iter)
    }
}

impl IntoIterator for Row {
    type Item = Scalar;
    type IntoIter = std::vec::IntoIter<Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.vals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str("]")
    }
}
