//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the
//! crate: the element-kind definitions, the shared error type, and the
//! centralized validation utilities. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops
//!   ↓
//! Layer 2: Vector
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Element kinds and the trait tying them to concrete numeric types.
pub mod dtype;

/// Shared error types.
pub mod errors;

/// Centralized argument validation.
pub mod validate;
