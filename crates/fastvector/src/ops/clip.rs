//! Element-wise clipping of vector values into a bounded range.
//!
//! ## Purpose
//!
//! This module provides three implementations of the same clip operation:
//! for every index `i` of the input, write
//! `min(max(input[i], min_value), max_value)` to the output. The variants
//! exist purely as performance alternatives and are observably identical
//! in output for identical input.
//!
//! ## Key concepts
//!
//! * [`checked_clip_vector`]: walks the vectors through the bounds-checked
//!   `get`/`set` accessors, paying the per-element validation cost.
//! * [`naive_clip_vector`]: a direct indexed loop over the raw slices.
//! * [`clip_vector`]: an iterator formulation that elides bounds checks
//!   and is eligible for auto-vectorization.
//!
//! ## Invariants
//!
//! * The input vector is never mutated.
//! * After a successful call, every output element in
//!   `[0, input.len())` lies within `[min_value, max_value]`; elements
//!   past the input length are untouched.
//! * All variants share one clamp helper, so their results are identical
//!   bit for bit.
//!
//! ## Non-goals
//!
//! * No SIMD intrinsics or parallel execution; the fast variant relies on
//!   the optimizer alone.
//! * No in-place clipping (input and output cannot alias under `&`/`&mut`).

// Internal dependencies
use crate::primitives::dtype::Element;
use crate::primitives::errors::VectorError;
use crate::primitives::validate::Validator;
use crate::vector::Vector;

// ============================================================================
// Shared Contract
// ============================================================================

/// Clamp a single element into `[min_value, max_value]`.
///
/// Shared by all clip variants so their outputs cannot diverge.
#[inline(always)]
fn clamp_element<T: Element>(value: T, min_value: T, max_value: T) -> T {
    if value < min_value {
        min_value
    } else if value > max_value {
        max_value
    } else {
        value
    }
}

/// Validate the shared clip preconditions, cheap checks first.
fn validate_clip<T: Element>(
    input: &Vector<T>,
    min_value: T,
    max_value: T,
    output: &Vector<T>,
) -> Result<(), VectorError> {
    Validator::validate_clip_bounds(min_value, max_value)?;
    Validator::validate_output_length(input.len(), output.len())
}

// ============================================================================
// Clip Variants
// ============================================================================

/// Clip through the bounds-checked element accessors.
///
/// Every read goes through [`Vector::get`] and every write through
/// [`Vector::set`], so each element pays the index validation cost. This
/// is the baseline the other variants are measured against.
///
/// Fails with [`VectorError::NonFiniteValue`] on NaN/infinite bounds,
/// [`VectorError::InvalidBounds`] if `min_value > max_value`, and
/// [`VectorError::LengthMismatch`] if `output` is shorter than `input`.
pub fn checked_clip_vector<T: Element>(
    input: &Vector<T>,
    min_value: T,
    max_value: T,
    output: &mut Vector<T>,
) -> Result<(), VectorError> {
    validate_clip(input, min_value, max_value, output)?;
    for i in 0..input.len() {
        let value = input.get(i)?;
        output.set(i, clamp_element(value, min_value, max_value))?;
    }
    Ok(())
}

/// Clip with a plain indexed loop over the raw slices.
///
/// Same contract and error conditions as [`checked_clip_vector`].
pub fn naive_clip_vector<T: Element>(
    input: &Vector<T>,
    min_value: T,
    max_value: T,
    output: &mut Vector<T>,
) -> Result<(), VectorError> {
    validate_clip(input, min_value, max_value, output)?;
    let src = input.as_slice();
    let dst = output.as_mut_slice();
    for i in 0..src.len() {
        dst[i] = clamp_element(src[i], min_value, max_value);
    }
    Ok(())
}

/// Clip with an iterator formulation the optimizer can vectorize.
///
/// Same contract and error conditions as [`checked_clip_vector`].
pub fn clip_vector<T: Element>(
    input: &Vector<T>,
    min_value: T,
    max_value: T,
    output: &mut Vector<T>,
) -> Result<(), VectorError> {
    validate_clip(input, min_value, max_value, output)?;
    let n = input.len();
    output.as_mut_slice()[..n]
        .iter_mut()
        .zip(input.as_slice())
        .for_each(|(out, &value)| *out = clamp_element(value, min_value, max_value));
    Ok(())
}
