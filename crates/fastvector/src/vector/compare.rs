//! Equality and ordering for vectors.
//!
//! ## Purpose
//!
//! Kind-independent value equality and magnitude-based ordering for
//! [`Vector`].
//!
//! ## Design notes
//!
//! * **Numeric equality**: Two vectors are equal iff they have the same
//!   length and every pair of corresponding elements compares equal in the
//!   `f64` domain. The element kinds need not match.
//! * **Magnitude ordering**: `PartialOrd` compares Euclidean norms, so it
//!   is a total preorder over magnitude rather than a lexicographic order
//!   over elements. Vectors of equal magnitude but different elements
//!   order as equal while comparing unequal under `==`.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::dtype::Element;
use crate::vector::Vector;

// ============================================================================
// Equality
// ============================================================================

impl<T: Element, U: Element> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| a.as_f64() == b.as_f64())
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl<T: Element> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }
}
