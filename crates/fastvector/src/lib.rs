//! # fastvector — a small fixed-length numeric vector type for Rust
//!
//! This crate provides [`prelude::Vector`], an owned, fixed-length,
//! homogeneously-typed numeric vector with arithmetic, magnitude-based
//! ordering, kind-independent equality, and bounds-checked element access,
//! plus a family of element-wise clipping operations that write clamped
//! values into a caller-supplied output vector.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastvector::prelude::*;
//! use fastvector::vector;
//!
//! let a = vector![2.5, -2.5];
//! let b = vector![-1.0, 1.0];
//!
//! // Arithmetic allocates a fresh result vector.
//! let diff = a.sub(&b)?;
//! assert_eq!(diff, vector![3.5, -3.5]);
//!
//! // Dot product of two vectors of equal length.
//! let dot = a.dot(&b)?;
//! assert_eq!(dot, -5.0);
//!
//! // Clip into a separate output vector.
//! let mut out = Vector::zeros(2)?;
//! clip_vector(&a, -1.0, 1.0, &mut out)?;
//! assert_eq!(out, vector![1.0, -1.0]);
//! # Result::<(), VectorError>::Ok(())
//! ```
//!
//! ## Element kinds
//!
//! Vectors are generic over the ten fixed-width numeric kinds
//! (`i8`/`u8`/`i16`/`u16`/`i32`/`u32`/`i64`/`u64`/`f32`/`f64`), with `f64`
//! as the default. The kind is fixed at construction; [`prelude::Vector::cast`]
//! converts between kinds explicitly.
//!
//! ```rust
//! use fastvector::prelude::*;
//! use fastvector::vector;
//!
//! let ints = vector![1_i32, 2, 3];
//! assert_eq!(ints.dtype(), DType::Int32);
//!
//! // Equality compares numeric values, not representations.
//! let floats = ints.cast::<f64>()?;
//! assert_eq!(ints, floats);
//! # Result::<(), VectorError>::Ok(())
//! ```
//!
//! ## Clip variants
//!
//! The three clip functions are performance variants of the same operation
//! and produce identical output for identical input:
//!
//! * [`prelude::checked_clip_vector`] — per-element bounds-checked accessors.
//! * [`prelude::naive_clip_vector`] — direct indexed loop over raw slices.
//! * [`prelude::clip_vector`] — iterator formulation the optimizer can vectorize.
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, VectorError>`. Errors are
//! raised at the point of detection and carry the offending values; there
//! are no sentinel returns and no partial results.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! fastvector = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - element kinds, errors, and validation.
mod primitives;

// Layer 2: Vector - the fixed-length numeric value type.
mod vector;

// Layer 3: Ops - element-wise operations over vectors.
mod ops;

// Standard fastvector prelude.
pub mod prelude {
    pub use crate::ops::clip::{checked_clip_vector, clip_vector, naive_clip_vector};
    pub use crate::primitives::dtype::{DType, Element};
    pub use crate::primitives::errors::VectorError;
    pub use crate::vector::Vector;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod vector {
        pub use crate::vector::*;
    }
    pub mod ops {
        pub use crate::ops::*;
    }
}
