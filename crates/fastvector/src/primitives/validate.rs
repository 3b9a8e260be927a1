//! Centralized argument validation for vector operations.
//!
//! ## Purpose
//!
//! This module provides the one reusable set of checks behind every
//! fallible vector operation, so that the same misuse always reports the
//! same error kind regardless of which operation detected it.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Checks on scalars are generic over [`Element`] kinds.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A passing check implies the corresponding operation cannot fail on
//!   that precondition.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the arithmetic or clipping itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::dtype::Element;
use crate::primitives::errors::VectorError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for vector construction, access, and clipping.
///
/// Provides static methods returning `Result<(), VectorError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Construction and Access
    // ========================================================================

    /// Validate that a vector holds at least one element.
    pub fn validate_non_empty(len: usize) -> Result<(), VectorError> {
        if len == 0 {
            return Err(VectorError::EmptyConstruction);
        }
        Ok(())
    }

    /// Validate an element index against the vector length.
    pub fn validate_index(index: usize, len: usize) -> Result<(), VectorError> {
        if index >= len {
            return Err(VectorError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    // ========================================================================
    // Arithmetic Operands
    // ========================================================================

    /// Validate that two operand vectors have the same length.
    pub fn validate_same_length(left: usize, right: usize) -> Result<(), VectorError> {
        if left != right {
            return Err(VectorError::LengthMismatch { left, right });
        }
        Ok(())
    }

    /// Validate a scalar divisor.
    pub fn validate_divisor<T: Element>(divisor: T) -> Result<(), VectorError> {
        if divisor == T::zero() {
            return Err(VectorError::DivisionByZero);
        }
        Ok(())
    }

    // ========================================================================
    // Clip Arguments
    // ========================================================================

    /// Validate a single scalar argument for finiteness.
    pub fn validate_finite<T: Element>(val: T, name: &str) -> Result<(), VectorError> {
        if !val.is_finite_value() {
            return Err(VectorError::NonFiniteValue(format!(
                "{}={:?}",
                name, val
            )));
        }
        Ok(())
    }

    /// Validate the clip bounds: both finite, and `min <= max`.
    pub fn validate_clip_bounds<T: Element>(min: T, max: T) -> Result<(), VectorError> {
        Self::validate_finite(min, "min_value")?;
        Self::validate_finite(max, "max_value")?;
        if min > max {
            return Err(VectorError::InvalidBounds {
                min: min.as_f64(),
                max: max.as_f64(),
            });
        }
        Ok(())
    }

    /// Validate that the output vector can hold every clipped input element.
    pub fn validate_output_length(input: usize, output: usize) -> Result<(), VectorError> {
        if output < input {
            return Err(VectorError::LengthMismatch {
                left: input,
                right: output,
            });
        }
        Ok(())
    }
}
