//! Integration tests for `Row`.

use tabula::{row, Complex64, LinError, Rational64, Row, Scalar};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn row_init_each_kind() {
    assert_eq!(Row::new([1, 2, 3]).len(), 3);
    assert_eq!(Row::new([0.1, 10.001]).len(), 2);
    assert_eq!(Row::new([Complex64::new(1.0, 2.0)]).len(), 1);
    assert_eq!(Row::new([Rational64::new(3, 4)]).len(), 1);
}

#[test]
fn row_init_mixed_and_empty() {
    let r = row![1, Complex64::new(2.0, 0.0), Rational64::new(3, 4), 5.6];
    assert_eq!(r.len(), 4);
    let empty = Row::new(Vec::<i64>::new());
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty, row![]);
}

#[test]
fn row_eq_through_copy_construction() {
    let r1 = Row::new([1, 2, 3]);
    let r2 = Row::new([1, 2, 3]);
    let r3 = Row::from(&r1);
    assert_eq!(r1, r2);
    assert_eq!(r2, r3);
    assert_eq!(r1, r3);
    assert_ne!(r1, Row::new([1, 2]));
    assert_ne!(r1, Row::new([1, 2, 4]));
}

#[test]
fn row_len_matches_source() {
    let vals = vec![1, 2, 3];
    let r = Row::from(vals.clone());
    assert_eq!(vals.len(), r.len());
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn row_get_and_set() {
    let mut r = Row::new([1, 2, 3]);
    assert_eq!(r[0], 1);
    r.set(0, 4).unwrap();
    assert_eq!(r, Row::new([4, 2, 3]));
}

#[test]
fn row_index_out_of_range() {
    init();
    let mut r = Row::new([1, 2, 3]);
    assert_eq!(r.get(3), Err(LinError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(r.set(3, 0), Err(LinError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(r, Row::new([1, 2, 3]));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn row_add() {
    let r1 = Row::new([1, 2, 3]);
    let r2 = Row::new([10, 20, 30]);
    let sum = (&r1 + &r2).unwrap();
    assert_eq!(r1, Row::new([1, 2, 3]), "self unchanged");
    assert_eq!(r2, Row::new([10, 20, 30]), "argument unchanged");
    assert_eq!(sum, Row::new([11, 22, 33]));
    for i in 0..sum.len() {
        assert_eq!(sum[i], (r1[i] + r2[i]).unwrap());
    }
}

#[test]
fn row_add_length_mismatch() {
    init();
    let r1 = Row::new([1, 2, 3]);
    let r2 = Row::new([1, 2]);
    assert_eq!(
        &r1 + &r2,
        Err(LinError::LengthMismatch { left: 3, right: 2 })
    );
}

#[test]
fn row_mul_scalar() {
    let r1 = Row::new([1, 2, 3]);
    let r2 = (&r1 * 2).unwrap();
    assert_eq!(r1, Row::new([1, 2, 3]), "self unchanged");
    assert_eq!(r2, Row::new([2, 4, 6]));
    for i in 0..r1.len() {
        assert_eq!(r2[i], (r1[i] * Scalar::from(2)).unwrap());
    }
}

#[test]
fn row_floor_div() {
    let r1 = Row::new([5]);
    let r2 = r1.floor_div(2).unwrap();
    assert_eq!(r1, Row::new([5]), "self unchanged");
    assert_eq!(r2, Row::new([2]));
}

#[test]
fn row_true_div() {
    let r1 = Row::new([5]);
    let r2 = (&r1 / 2).unwrap();
    assert_eq!(r1, Row::new([5]), "self unchanged");
    assert_eq!(r2, Row::new([2.5]));
}

#[test]
fn row_reflected_div_keeps_scalar_as_divisor() {
    let r = Row::new([5, 10]);
    assert_eq!((2 / &r).unwrap(), (&r / 2).unwrap());
    assert_eq!((2 / &r).unwrap(), Row::new([2.5, 5.0]));
    assert_eq!(
        Scalar::from(2).floor_div_row(&r).unwrap(),
        r.floor_div(2).unwrap()
    );
}

#[test]
fn row_div_by_zero() {
    let ints = Row::new([1, 2]);
    assert_eq!(&ints / 0, Err(LinError::DivisionByZero));
    assert_eq!(ints.floor_div(0), Err(LinError::DivisionByZero));
    let rationals = Row::new([Rational64::new(1, 2)]);
    assert_eq!(&rationals / 0, Err(LinError::DivisionByZero));
    let floats = Row::new([1.0, -1.0]);
    assert_eq!(
        (&floats / 0.0).unwrap(),
        Row::new([f64::INFINITY, f64::NEG_INFINITY])
    );
}

#[test]
fn row_mixed_kind_promotion() {
    let r = row![1, 2.0, Rational64::new(1, 2), Complex64::new(0.0, 1.0)];
    let doubled = (&r * 2).unwrap();
    assert_eq!(
        doubled,
        row![2, 4.0, 1, Complex64::new(0.0, 2.0)]
    );
    let kinds: Vec<_> = doubled.iter().map(Scalar::kind).collect();
    assert_eq!(
        kinds,
        vec![
            tabula::ScalarKind::Int,
            tabula::ScalarKind::Float,
            tabula::ScalarKind::Rational,
            tabula::ScalarKind::Complex
        ]
    );
    assert!(r.floor_div(2).is_err(), "complex floor division is rejected");
}

// ---------------------------------------------------------------------------
// Copy semantics
// ---------------------------------------------------------------------------

#[test]
fn row_copy() {
    let r1 = row![1, 2.0, Complex64::new(3.0, 4.0), Rational64::new(5, 6)];
    let mut r2 = r1.clone();
    assert_eq!(r1, r2, "copy loses no data");
    assert_ne!(
        r1.as_slice().as_ptr(),
        r2.as_slice().as_ptr(),
        "copy creates new backing storage"
    );
    r2.set(0, 100).unwrap();
    assert_eq!(r1[0], 1);
    assert_ne!(r1, r2);
}
