//! Tests for vector construction and element access.
//!
//! These tests verify the construction paths and accessor contracts of
//! `Vector`:
//! - Fallible and macro construction, zero/filled vectors
//! - Bounds-checked `get`/`set` and panicking `Index`
//! - Element-kind inspection and explicit kind conversion
//!
//! ## Test Organization
//!
//! 1. **Construction** - `new`, `zeros`, `filled`, `from_slice`, `vector!`
//! 2. **Element Access** - `get`, `set`, indexing, slices
//! 3. **Kind Conversion** - `dtype` and `cast`

use fastvector::prelude::*;
use fastvector::vector;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test fallible construction from a list of values.
#[test]
fn test_new_from_values() {
    let v = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();

    assert_eq!(v.len(), 3);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
}

/// Test that construction with no values is rejected.
///
/// Verifies the non-empty invariant at every construction path.
#[test]
fn test_new_empty_rejected() {
    let res = Vector::<f64>::new(vec![]);

    assert!(
        matches!(res, Err(VectorError::EmptyConstruction)),
        "Empty construction should error"
    );

    assert!(matches!(
        Vector::<f64>::zeros(0),
        Err(VectorError::EmptyConstruction)
    ));
    assert!(matches!(
        Vector::filled(0, 7_i32),
        Err(VectorError::EmptyConstruction)
    ));
}

/// Test zero and filled vectors.
#[test]
fn test_zeros_and_filled() {
    let z = Vector::<f64>::zeros(3).unwrap();
    assert_eq!(z, vector![0.0, 0.0, 0.0]);

    let f = Vector::filled(2, 9_i32).unwrap();
    assert_eq!(f, vector![9, 9]);
}

/// Test variadic construction via the macro.
///
/// The macro grammar requires at least one element, so the non-empty
/// invariant holds by construction.
#[test]
fn test_vector_macro() {
    let v = vector![2.5, -2.5];

    assert_eq!(v.len(), 2);
    assert_eq!(v.get(0).unwrap(), 2.5);
    assert_eq!(v.get(1).unwrap(), -2.5);

    // Trailing comma is accepted.
    let w = vector![1.0, 2.0, 3.0,];
    assert_eq!(w.len(), 3);
}

/// Test that `from_slice` panics on an empty slice.
#[test]
#[should_panic(expected = "at least one element")]
fn test_from_slice_empty_panics() {
    let _ = Vector::<f64>::from_slice(&[]);
}

// ============================================================================
// Element Access Tests
// ============================================================================

/// Test bounds-checked reads.
///
/// Verifies that `get` returns the element in range and
/// IndexOutOfRange past the end. Negative indices are unrepresentable
/// in `usize` and rejected at compile time.
#[test]
fn test_get_bounds() {
    let v = vector![1.0, 1.0];

    assert_eq!(v.get(0).unwrap(), 1.0);
    assert!(matches!(
        v.get(2),
        Err(VectorError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

/// Test in-place element assignment.
///
/// Verifies the single-element write and the out-of-range failure.
#[test]
fn test_set_bounds() {
    let mut v = vector![1.0, 2.0];

    v.set(1, 5.0).unwrap();
    assert_eq!(v, vector![1.0, 5.0]);

    assert!(matches!(
        v.set(2, 0.0),
        Err(VectorError::IndexOutOfRange { index: 2, len: 2 })
    ));
    // Failed writes leave the vector untouched.
    assert_eq!(v, vector![1.0, 5.0]);
}

/// Test slice-style indexing.
#[test]
fn test_indexing() {
    let mut v = vector![1, 2, 3];

    assert_eq!(v[0], 1);
    v[2] = 7;
    assert_eq!(v[2], 7);
}

/// Test that out-of-range slice-style indexing panics.
#[test]
#[should_panic]
fn test_indexing_out_of_range_panics() {
    let v = vector![1, 2, 3];
    let _ = v[3];
}

/// Test iteration and mutable slice access.
#[test]
fn test_iter_and_slices() {
    let mut v = vector![1.0, 2.0, 3.0];

    let doubled: Vec<f64> = v.iter().map(|&x| x * 2.0).collect();
    assert_eq!(doubled, vec![2.0, 4.0, 6.0]);

    v.as_mut_slice()[0] = 10.0;
    assert_eq!(v.as_slice(), &[10.0, 2.0, 3.0]);
}

// ============================================================================
// Kind Conversion Tests
// ============================================================================

/// Test element-kind inspection.
#[test]
fn test_dtype() {
    assert_eq!(vector![1.0, 2.0].dtype(), DType::Float64);
    assert_eq!(vector![1.0_f32].dtype(), DType::Float32);
    assert_eq!(vector![1_i32].dtype(), DType::Int32);
    assert_eq!(vector![1_u8].dtype(), DType::UInt8);
}

/// Test kind conversion between representations.
///
/// Verifies widening casts, float truncation, and numeric equality across
/// kinds after conversion.
#[test]
fn test_cast() {
    let ints = vector![1_i32, 2, 3];
    let floats = ints.cast::<f64>().unwrap();

    assert_eq!(floats.dtype(), DType::Float64);
    assert_eq!(ints, floats);

    // Float-to-integer casts truncate.
    let truncated = vector![2.9_f64, -1.5].cast::<i32>().unwrap();
    assert_eq!(truncated, vector![2, -1]);
}

/// Test cast failures for unrepresentable values.
#[test]
fn test_cast_unrepresentable() {
    // Negative into an unsigned kind.
    assert!(matches!(
        vector![-1_i32].cast::<u8>(),
        Err(VectorError::InvalidCast { to: DType::UInt8, .. })
    ));

    // Out of range for the narrower kind.
    assert!(matches!(
        vector![300.0_f64].cast::<i8>(),
        Err(VectorError::InvalidCast { to: DType::Int8, .. })
    ));

    // NaN into an integer kind.
    assert!(matches!(
        vector![f64::NAN].cast::<i64>(),
        Err(VectorError::InvalidCast { to: DType::Int64, .. })
    ));
}
