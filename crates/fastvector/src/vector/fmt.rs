//! Display and Debug renderings for vectors.
//!
//! `Display` renders the bare element sequence, `(e0, e1, ..., en-1)`.
//! `Debug` renders a constructor-style form qualified by the element kind,
//! `Vector<float64>(e0, e1, ..., en-1)`. Elements use their kind's natural
//! literal form (floats keep a fractional part). Display-only; there is no
//! parsing counterpart.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// Internal dependencies
use crate::primitives::dtype::Element;
use crate::vector::Vector;

impl<T: Element> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        f.write_str(")")
    }
}

impl<T: Element> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Vector<{}>{}", T::DTYPE, self)
    }
}
