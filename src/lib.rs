//! Row and matrix value types over a mixed numeric scalar domain.
//!
//! ```
//! use tabula::matrix;
//!
//! let m = matrix![[1, 1, 1], [10, 10, 10]].unwrap();
//! let scaled = (&m * 3.5).unwrap();
//! assert_eq!(scaled, matrix![[3.5, 3.5, 3.5], [35.0, 35.0, 35.0]].unwrap());
//! assert_eq!(m.dimensions(), (2, 3));
//! ```
#[macro_use]
mod macros;
mod error;
mod matrix;
mod row;
mod scalar;

pub use crate::error::{LResult, LinError};
pub use crate::matrix::{Columns, Matrix, Rows};
pub use crate::row::Row;
pub use crate::scalar::{Scalar, ScalarKind};
pub use num_complex::Complex64;
pub use num_rational::Rational64;
