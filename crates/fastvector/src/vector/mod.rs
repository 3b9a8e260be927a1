//! Layer 2: Vector
//!
//! # Purpose
//!
//! This layer provides [`Vector`], the fixed-length numeric value type at
//! the core of the crate: construction, bounds-checked element access,
//! magnitude, kind conversion, arithmetic, comparison, and rendering.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops
//!   ↓
//! Layer 2: Vector ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// Arithmetic operations and operator impls.
mod arith;

// Equality and magnitude-based ordering.
mod compare;

// Display and Debug renderings.
mod fmt;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use core::slice::Iter;
use num_traits::{Float, NumCast};

// Internal dependencies
use crate::primitives::dtype::{DType, Element};
use crate::primitives::errors::VectorError;
use crate::primitives::validate::Validator;

// ============================================================================
// Vector
// ============================================================================

/// A fixed-length, mutable, homogeneously-typed numeric vector.
///
/// The length and element kind are fixed at construction; elements mutate
/// only through indexed assignment. The element kind defaults to `f64`.
///
/// Every arithmetic operation allocates a fresh result vector; operand
/// buffers are never aliased.
#[derive(Clone)]
pub struct Vector<T: Element = f64> {
    values: Vec<T>,
}

/// Construct a [`Vector`] from a variadic list of elements.
///
/// The grammar requires at least one element, so the resulting vector
/// always satisfies the non-empty invariant.
///
/// ```rust
/// use fastvector::vector;
///
/// let v = vector![2.5, -2.5];
/// assert_eq!(v.len(), 2);
/// ```
#[macro_export]
macro_rules! vector {
    ($($value:expr),+ $(,)?) => {
        $crate::prelude::Vector::from_slice(&[$($value),+])
    };
}

impl<T: Element> Vector<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector from an ordered list of values.
    ///
    /// Fails with [`VectorError::EmptyConstruction`] if `values` is empty.
    pub fn new(values: Vec<T>) -> Result<Self, VectorError> {
        Validator::validate_non_empty(values.len())?;
        Ok(Self { values })
    }

    /// Create a vector by copying a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty. Use [`Vector::new`] for fallible
    /// construction; the [`vector!`] macro guarantees non-emptiness.
    pub fn from_slice(values: &[T]) -> Self {
        assert!(!values.is_empty(), "a vector requires at least one element");
        Self {
            values: values.to_vec(),
        }
    }

    /// Create a vector of `len` zeros.
    ///
    /// Fails with [`VectorError::EmptyConstruction`] if `len` is zero.
    pub fn zeros(len: usize) -> Result<Self, VectorError> {
        Self::filled(len, T::zero())
    }

    /// Create a vector of `len` copies of `value`.
    ///
    /// Fails with [`VectorError::EmptyConstruction`] if `len` is zero.
    pub fn filled(len: usize, value: T) -> Result<Self, VectorError> {
        Validator::validate_non_empty(len)?;
        Ok(Self {
            values: vec![value; len],
        })
    }

    /// Convert every element to another element kind.
    ///
    /// Fails with [`VectorError::InvalidCast`] if a value is not
    /// representable in `U` (e.g. a negative value into an unsigned kind,
    /// or NaN into an integer kind). Float-to-integer casts truncate.
    pub fn cast<U: Element>(&self) -> Result<Vector<U>, VectorError> {
        let mut values = Vec::with_capacity(self.len());
        for &v in &self.values {
            let converted = <U as NumCast>::from(v).ok_or(VectorError::InvalidCast {
                value: v.as_f64(),
                to: U::DTYPE,
            })?;
            values.push(converted);
        }
        Ok(Vector { values })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The fixed element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The element kind of this vector.
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// The element at `index`.
    ///
    /// Fails with [`VectorError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T, VectorError> {
        Validator::validate_index(index, self.len())?;
        Ok(self.values[index])
    }

    /// Overwrite the element at `index` in place.
    ///
    /// Fails with [`VectorError::IndexOutOfRange`] if `index >= len()`.
    /// No side effects beyond the single element write.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        Validator::validate_index(index, self.len())?;
        self.values[index] = value;
        Ok(())
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter()
    }

    // ========================================================================
    // Magnitude
    // ========================================================================

    /// The Euclidean norm, computed over all elements coerced to `f64`.
    ///
    /// Never negative; NaN only if a float element is NaN.
    pub fn magnitude(&self) -> f64 {
        let sum = self
            .values
            .iter()
            .map(|v| {
                let x = v.as_f64();
                x * x
            })
            .sum::<f64>();
        Float::sqrt(sum)
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T: Element> Index<usize> for Vector<T> {
    type Output = T;

    /// Slice-style access. Panics on out-of-range indices; use
    /// [`Vector::get`] for a fallible lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: Element> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}
