use crate::scalar::ScalarKind;
use thiserror::Error;

pub type LResult<T> = Result<T, LinError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinError {
    #[error("{op} is not defined for {kind} values")]
    TypeMismatch { op: &'static str, kind: ScalarKind },
    #[error("cannot combine rows of different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("was expecting row of width {expected}, got {found}")]
    WidthMismatch { expected: usize, found: usize },
    #[error("can only combine matrices with the same dimensions, got {left:?} and {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("rows must be of the same length: row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("no rows to assign to")]
    NoRows,
    #[error("division by zero")]
    DivisionByZero,
    #[error("overflow in {op}")]
    Overflow { op: &'static str },
}
