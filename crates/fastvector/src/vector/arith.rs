//! Arithmetic over vectors.
//!
//! ## Purpose
//!
//! Element-wise addition and subtraction, the dot product, scalar
//! multiplication, and scalar division for [`Vector`].
//!
//! ## Design notes
//!
//! * **Fresh results**: Every operation allocates a new vector; operands
//!   are read-only and never aliased by the result.
//! * **Fallible by contract**: Length and divisor checks go through the
//!   centralized [`Validator`]; mismatched lengths fail rather than
//!   silently truncating to the shorter operand.
//! * **Operators**: Only the infallible scalar multiplication is exposed
//!   as a `std::ops` impl; fallible operations stay named methods so the
//!   error path is explicit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Mul;

// Internal dependencies
use crate::primitives::dtype::Element;
use crate::primitives::errors::VectorError;
use crate::primitives::validate::Validator;
use crate::vector::Vector;

// ============================================================================
// Element-wise Arithmetic
// ============================================================================

impl<T: Element> Vector<T> {
    /// Element-wise addition, producing a new vector of the same length.
    ///
    /// Fails with [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>, VectorError> {
        Validator::validate_same_length(self.len(), other.len())?;
        let values: Vec<T> = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Vector { values })
    }

    /// Element-wise subtraction, producing a new vector of the same length.
    ///
    /// Fails with [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn sub(&self, other: &Vector<T>) -> Result<Vector<T>, VectorError> {
        Validator::validate_same_length(self.len(), other.len())?;
        let values: Vec<T> = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Vector { values })
    }

    /// The scalar dot product of two vectors of equal length.
    ///
    /// Fails with [`VectorError::LengthMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector<T>) -> Result<T, VectorError> {
        Validator::validate_same_length(self.len(), other.len())?;
        let mut acc = T::zero();
        for (&a, &b) in self.iter().zip(other.iter()) {
            acc = acc + a * b;
        }
        Ok(acc)
    }

    /// Scale every element by `factor`, producing a new vector.
    pub fn scale(&self, factor: T) -> Vector<T> {
        Vector {
            values: self.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Divide every element by `divisor`, producing a new vector.
    ///
    /// Fails with [`VectorError::DivisionByZero`] if `divisor` is zero,
    /// for integer and floating-point kinds alike.
    pub fn div(&self, divisor: T) -> Result<Vector<T>, VectorError> {
        Validator::validate_divisor(divisor)?;
        Ok(Vector {
            values: self.iter().map(|&v| v / divisor).collect(),
        })
    }
}

// ============================================================================
// Scalar Multiplication Operators
// ============================================================================

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn mul(self, factor: T) -> Vector<T> {
        self.scale(factor)
    }
}

impl<T: Element> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn mul(self, factor: T) -> Vector<T> {
        self.scale(factor)
    }
}
