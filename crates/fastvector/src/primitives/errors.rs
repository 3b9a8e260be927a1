//! Error types for vector operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during vector
//! construction, element access, arithmetic, and clipping.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the relevant values (e.g., actual vs.
//!   expected lengths, the offending index).
//! * **Statically narrowed**: There is no `TypeMismatch` variant; operand
//!   kinds are enforced by the type system, so the runtime taxonomy only
//!   covers value-level failures.
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::dtype::DType;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for vector operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// A vector must hold at least one element.
    EmptyConstruction,

    /// Clip bounds are out of order; the minimum must not exceed the maximum.
    InvalidBounds {
        /// Lower bound, coerced to `f64` for reporting.
        min: f64,
        /// Upper bound, coerced to `f64` for reporting.
        max: f64,
    },

    /// Operand vectors must have the same length (or the output must be at
    /// least as long as the input, for clipping).
    LengthMismatch {
        /// Length of the left-hand (or input) vector.
        left: usize,
        /// Length of the right-hand (or output) vector.
        right: usize,
    },

    /// Element index outside `[0, len)`.
    IndexOutOfRange {
        /// The index requested.
        index: usize,
        /// The vector length.
        len: usize,
    },

    /// Division by the zero scalar.
    DivisionByZero,

    /// A scalar argument was NaN or infinite where a finite value is required.
    NonFiniteValue(String),

    /// A value is not representable in the requested element kind.
    InvalidCast {
        /// The source value, coerced to `f64` for reporting.
        value: f64,
        /// The target element kind.
        to: DType,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyConstruction => {
                write!(f, "A vector requires at least one element")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: min {min} must be <= max {max}")
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: {left} vs {right}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for length {len}")
            }
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::NonFiniteValue(s) => write!(f, "Non-finite value: {s}"),
            Self::InvalidCast { value, to } => {
                write!(f, "Value {value} is not representable as {to}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for VectorError {}
