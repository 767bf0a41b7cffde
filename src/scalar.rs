use std::fmt;

use half::f16;
use num_complex::{Complex32, Complex64};
use num_rational::{Rational32, Rational64};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::error::{LResult, LinError};

/// The numeric kind carried by a [`Scalar`], ordered by promotion rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarKind {
    Int,
    Rational,
    Float,
    Complex,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Int => "int",
            ScalarKind::Rational => "rational",
            ScalarKind::Float => "float",
            ScalarKind::Complex => "complex",
        };
        f.write_str(name)
    }
}

/// A single matrix entry.
///
/// Mixed-kind arithmetic lifts both operands to the higher [`ScalarKind`]
/// (`Int < Rational < Float < Complex`) before operating, with two
/// exceptions: true division of two ints yields a float, and floor division
/// of two rationals yields an int. Exact kinds use checked arithmetic.
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Rational(Rational64),
}

/// Both operands of a binary operation, lifted to a common kind.
enum Promoted {
    Int(i64, i64),
    Rational(Rational64, Rational64),
    Float(f64, f64),
    Complex(Complex64, Complex64),
}

#[inline]
fn ratio_to_f64(r: Rational64) -> f64 {
    *r.numer() as f64 / *r.denom() as f64
}

#[inline]
fn floor_div_i64(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

#[inline]
fn floor_div_f64(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return (a / b).floor();
    }
    let m = a % b;
    let mut d = (a - m) / b;
    if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
        d -= 1.0;
    }
    if d == 0.0 {
        return 0.0f64.copysign(a / b);
    }
    let mut q = d.floor();
    if d - q > 0.5 {
        q += 1.0;
    }
    q
}

// exponents carry a sign and at least two digits: 1e+16, 1.5e-07
fn fmt_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }
    let s = format!("{:?}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

// complex parts drop the trailing ".0"
fn fmt_complex_part(v: f64) -> String {
    let s = fmt_float(v);
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Complex(_) => ScalarKind::Complex,
            Scalar::Rational(_) => ScalarKind::Rational,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Int(v) => *v == 0,
            Scalar::Float(v) => *v == 0.0,
            Scalar::Complex(v) => v.is_zero(),
            Scalar::Rational(v) => v.is_zero(),
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
            Scalar::Complex(v) => v.re,
            Scalar::Rational(v) => ratio_to_f64(v),
        }
    }

    /// The value as an `f64`, if it converts without rounding.
    fn exact_f64(self) -> Option<f64> {
        match self {
            Scalar::Int(v) => {
                let f = v as f64;
                (f as i128 == v as i128).then_some(f)
            }
            Scalar::Rational(r) => {
                let (n, d) = (*r.numer(), *r.denom());
                let f = n as f64;
                (d.count_ones() == 1 && f as i128 == n as i128).then(|| f / d as f64)
            }
            Scalar::Float(v) => Some(v),
            Scalar::Complex(v) => (v.im == 0.0).then_some(v.re),
        }
    }

    fn is_exact(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Rational(_))
    }

    fn to_complex(self) -> Complex64 {
        match self {
            Scalar::Complex(v) => v,
            other => Complex64::new(other.to_f64(), 0.0),
        }
    }

    fn promote(self, rhs: Scalar) -> Promoted {
        use Scalar::*;
        match (self, rhs) {
            (Int(a), Int(b)) => Promoted::Int(a, b),
            (Complex(a), b) => Promoted::Complex(a, b.to_complex()),
            (a, Complex(b)) => Promoted::Complex(a.to_complex(), b),
            (Float(a), b) => Promoted::Float(a, b.to_f64()),
            (a, Float(b)) => Promoted::Float(a.to_f64(), b),
            (Rational(a), Int(b)) => Promoted::Rational(a, Rational64::from_integer(b)),
            (Int(a), Rational(b)) => Promoted::Rational(Rational64::from_integer(a), b),
            (Rational(a), Rational(b)) => Promoted::Rational(a, b),
        }
    }

    pub fn try_add(self, rhs: Scalar) -> LResult<Scalar> {
        const OP: &str = "addition";
        match self.promote(rhs) {
            Promoted::Int(a, b) => a
                .checked_add(b)
                .map(Scalar::Int)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Rational(a, b) => a
                .checked_add(&b)
                .map(Scalar::Rational)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Float(a, b) => Ok(Scalar::Float(a + b)),
            Promoted::Complex(a, b) => Ok(Scalar::Complex(a + b)),
        }
    }

    pub fn try_sub(self, rhs: Scalar) -> LResult<Scalar> {
        const OP: &str = "subtraction";
        match self.promote(rhs) {
            Promoted::Int(a, b) => a
                .checked_sub(b)
                .map(Scalar::Int)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Rational(a, b) => a
                .checked_sub(&b)
                .map(Scalar::Rational)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Float(a, b) => Ok(Scalar::Float(a - b)),
            Promoted::Complex(a, b) => Ok(Scalar::Complex(a - b)),
        }
    }

    pub fn try_mul(self, rhs: Scalar) -> LResult<Scalar> {
        const OP: &str = "multiplication";
        match self.promote(rhs) {
            Promoted::Int(a, b) => a
                .checked_mul(b)
                .map(Scalar::Int)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Rational(a, b) => a
                .checked_mul(&b)
                .map(Scalar::Rational)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Float(a, b) => Ok(Scalar::Float(a * b)),
            Promoted::Complex(a, b) => Ok(Scalar::Complex(a * b)),
        }
    }

    /// Exact division. Two ints divide to a float; a zero int or rational
    /// divisor is an error, while floats and complex values follow IEEE-754.
    pub fn true_div(self, rhs: Scalar) -> LResult<Scalar> {
        const OP: &str = "division";
        match self.promote(rhs) {
            Promoted::Int(_, 0) => Err(LinError::DivisionByZero),
            Promoted::Int(a, b) => Ok(Scalar::Float(a as f64 / b as f64)),
            Promoted::Rational(_, b) if b.is_zero() => Err(LinError::DivisionByZero),
            Promoted::Rational(a, b) => a
                .checked_div(&b)
                .map(Scalar::Rational)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Float(a, b) => Ok(Scalar::Float(a / b)),
            Promoted::Complex(a, b) => Ok(Scalar::Complex(a / b)),
        }
    }

    /// Division rounded toward negative infinity. Rationals floor to an int,
    /// floats floor to a float, and complex values are rejected.
    pub fn floor_div(self, rhs: Scalar) -> LResult<Scalar> {
        const OP: &str = "floor division";
        match self.promote(rhs) {
            Promoted::Int(_, 0) => Err(LinError::DivisionByZero),
            Promoted::Int(a, b) => floor_div_i64(a, b)
                .map(Scalar::Int)
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Rational(_, b) if b.is_zero() => Err(LinError::DivisionByZero),
            Promoted::Rational(a, b) => a
                .checked_div(&b)
                .map(|q| Scalar::Int(q.floor().to_integer()))
                .ok_or(LinError::Overflow { op: OP }),
            Promoted::Float(a, b) => Ok(Scalar::Float(floor_div_f64(a, b))),
            Promoted::Complex(..) => Err(LinError::TypeMismatch {
                op: OP,
                kind: ScalarKind::Complex,
            }),
        }
    }

    pub fn try_neg(self) -> LResult<Scalar> {
        const OP: &str = "negation";
        match self {
            Scalar::Int(v) => v
                .checked_neg()
                .map(Scalar::Int)
                .ok_or(LinError::Overflow { op: OP }),
            Scalar::Rational(v) => v
                .numer()
                .checked_neg()
                .map(|n| Scalar::Rational(Rational64::new_raw(n, *v.denom())))
                .ok_or(LinError::Overflow { op: OP }),
            Scalar::Float(v) => Ok(Scalar::Float(-v)),
            Scalar::Complex(v) => Ok(Scalar::Complex(-v)),
        }
    }
}

// An exact value equals an inexact one only if it converts to `f64` without
// rounding.
fn eq_inexact(exact: Scalar, inexact: Scalar) -> bool {
    match exact.exact_f64() {
        Some(v) => Complex64::new(v, 0.0) == inexact.to_complex(),
        None => false,
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        match (self.is_exact(), other.is_exact()) {
            (true, false) => return eq_inexact(*self, *other),
            (false, true) => return eq_inexact(*other, *self),
            _ => {}
        }
        match self.promote(*other) {
            Promoted::Int(a, b) => a == b,
            Promoted::Rational(a, b) => a == b,
            Promoted::Float(a, b) => a == b,
            Promoted::Complex(a, b) => a == b,
        }
    }
}

macro_rules! impl_scalar_partial_eq {
    ($($t:ty),*) => {
        $(impl PartialEq<$t> for Scalar {
            fn eq(&self, other: &$t) -> bool {
                *self == Scalar::from(*other)
            }
        })*
    };
}

impl_scalar_partial_eq!(i32, i64, f64, Complex64, Rational64);

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => f.write_str(&fmt_float(*v)),
            Scalar::Rational(v) => write!(f, "{}", v),
            Scalar::Complex(v) => {
                if v.re == 0.0 && v.re.is_sign_positive() {
                    write!(f, "{}j", fmt_complex_part(v.im))
                } else {
                    let sign = if v.im.is_sign_negative() { '-' } else { '+' };
                    write!(
                        f,
                        "({}{}{}j)",
                        fmt_complex_part(v.re),
                        sign,
                        fmt_complex_part(v.im.abs())
                    )
                }
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(v: $t) -> Self {
                Scalar::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_try_from_wide_int {
    ($($t:ty),*) => {
        $(impl TryFrom<$t> for Scalar {
            type Error = LinError;

            fn try_from(v: $t) -> LResult<Self> {
                i64::try_from(v)
                    .map(Scalar::Int)
                    .map_err(|_| LinError::Overflow { op: "conversion" })
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);
impl_try_from_wide_int!(u64, usize, i128, u128);

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<f16> for Scalar {
    fn from(v: f16) -> Self {
        Scalar::Float(v.to_f64())
    }
}

impl From<Complex32> for Scalar {
    fn from(v: Complex32) -> Self {
        Scalar::Complex(Complex64::new(v.re as f64, v.im as f64))
    }
}

impl From<Complex64> for Scalar {
    fn from(v: Complex64) -> Self {
        Scalar::Complex(v)
    }
}

impl From<Rational32> for Scalar {
    fn from(v: Rational32) -> Self {
        Scalar::Rational(Rational64::new_raw(*v.numer() as i64, *v.denom() as i64))
    }
}

impl From<Rational64> for Scalar {
    fn from(v: Rational64) -> Self {
        Scalar::Rational(v)
    }
}

impl From<Scalar> for Complex64 {
    fn from(v: Scalar) -> Self {
        v.to_complex()
    }
}

impl TryFrom<Scalar> for i64 {
    type Error = LinError;

    fn try_from(v: Scalar) -> LResult<i64> {
        let mismatch = LinError::TypeMismatch {
            op: "conversion to int",
            kind: v.kind(),
        };
        match v {
            Scalar::Int(i) => Ok(i),
            Scalar::Rational(r) if r.is_integer() => Ok(r.to_integer()),
            Scalar::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(f as i64)
            }
            _ => Err(mismatch),
        }
    }
}

impl TryFrom<Scalar> for f64 {
    type Error = LinError;

    fn try_from(v: Scalar) -> LResult<f64> {
        v.exact_f64().ok_or(LinError::TypeMismatch {
            op: "conversion to float",
            kind: v.kind(),
        })
    }
}

macro_rules! impl_scalar_binary_op {
    ($trt:ident, $mth:ident, $imp:ident) => {
        impl std::ops::$trt for Scalar {
            type Output = LResult<Scalar>;

            fn $mth(self, rhs: Scalar) -> Self::Output {
                self.$imp(rhs)
            }
        }
    };
}

impl_scalar_binary_op!(Add, add, try_add);
impl_scalar_binary_op!(Sub, sub, try_sub);
impl_scalar_binary_op!(Mul, mul, try_mul);
impl_scalar_binary_op!(Div, div, true_div);

impl std::ops::Neg for Scalar {
    type Output = LResult<Scalar>;

    fn neg(self) -> Self::Output {
        self.try_neg()
    }
}
