//! Layer 3: Ops
//!
//! # Purpose
//!
//! This layer provides element-wise operations that read one vector and
//! write into a caller-supplied output vector. Currently this is the
//! clipping family.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops ← You are here
//!   ↓
//! Layer 2: Vector
//!   ↓
//! Layer 1: Primitives
//! ```

/// The clip operation family.
pub mod clip;
