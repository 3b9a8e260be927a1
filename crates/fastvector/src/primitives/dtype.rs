//! Element kinds for numeric vectors.
//!
//! ## Purpose
//!
//! This module enumerates the ten fixed-width numeric kinds a vector can
//! hold and ties each kind to its concrete Rust type through the
//! [`Element`] trait. The kind of a vector is fixed at construction and
//! determined statically by its type parameter.
//!
//! ## Design notes
//!
//! * **Static dispatch**: The element kind is a type parameter, not a
//!   runtime tag; `Element::DTYPE` recovers the tag where display or
//!   diagnostics need it.
//! * **Closed set**: `Element` is implemented exactly for the ten
//!   supported primitive types and is not intended for downstream impls.
//! * **Legacy codes**: Each kind keeps the single-character type code used
//!   by earlier revisions of this project for interoperability in
//!   diagnostics.
//!
//! ## Invariants
//!
//! * `DType::from_type_code(k.type_code()) == Some(k)` for every kind `k`.
//! * `Element::as_f64` is total: it never fails, at worst losing precision
//!   for 64-bit integers beyond 2^53.
//!
//! ## Non-goals
//!
//! * This module does not define arithmetic semantics (the vector layer does).
//! * No runtime kind dispatch or dynamically-typed element storage.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::ops::{Add, Div, Mul, Sub};
use num_traits::{NumCast, One, ToPrimitive, Zero};

// ============================================================================
// DType - Element Kind Tags
// ============================================================================

/// The fixed-width numeric representation of a vector's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 8-bit signed integer.
    Int8,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit signed integer.
    Int16,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit signed integer.
    Int32,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
}

impl DType {
    /// All supported element kinds, in width order.
    pub const ALL: [DType; 10] = [
        DType::Int8,
        DType::UInt8,
        DType::Int16,
        DType::UInt16,
        DType::Int32,
        DType::UInt32,
        DType::Int64,
        DType::UInt64,
        DType::Float32,
        DType::Float64,
    ];

    /// Canonical lowercase name of the kind (e.g. `"int32"`, `"float64"`).
    pub fn name(self) -> &'static str {
        match self {
            DType::Int8 => "int8",
            DType::UInt8 => "uint8",
            DType::Int16 => "int16",
            DType::UInt16 => "uint16",
            DType::Int32 => "int32",
            DType::UInt32 => "uint32",
            DType::Int64 => "int64",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    /// Width of one element of this kind, in bytes.
    pub fn size_of(self) -> usize {
        match self {
            DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 => 8,
        }
    }

    /// Whether this kind is a floating-point kind.
    pub fn is_float(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// Whether this kind can represent negative values.
    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            DType::UInt8 | DType::UInt16 | DType::UInt32 | DType::UInt64
        )
    }

    /// Single-character type code carried over from earlier revisions of
    /// this project (array-module style codes).
    pub fn type_code(self) -> char {
        match self {
            DType::Int8 => 'b',
            DType::UInt8 => 'B',
            DType::Int16 => 'h',
            DType::UInt16 => 'H',
            DType::Int32 => 'l',
            DType::UInt32 => 'L',
            DType::Int64 => 'q',
            DType::UInt64 => 'Q',
            DType::Float32 => 'f',
            DType::Float64 => 'd',
        }
    }

    /// Resolve a legacy single-character type code back to a kind.
    pub fn from_type_code(code: char) -> Option<DType> {
        DType::ALL.iter().copied().find(|k| k.type_code() == code)
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Element - Trait over Concrete Numeric Types
// ============================================================================

/// A fixed-width numeric type usable as a vector element.
///
/// Implemented exactly for the ten kinds enumerated by [`DType`].
pub trait Element:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + NumCast
    + ToPrimitive
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The kind tag for this element type.
    const DTYPE: DType;

    /// Whether the value is finite. Always true for integer kinds.
    fn is_finite_value(self) -> bool;

    /// Coerce the value into the `f64` domain for magnitude and
    /// kind-independent comparison.
    fn as_f64(self) -> f64;
}

macro_rules! element_int_impl {
    ($t:ty, $dtype:ident) => {
        impl Element for $t {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn is_finite_value(self) -> bool {
                true
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

macro_rules! element_float_impl {
    ($t:ty, $dtype:ident) => {
        impl Element for $t {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn is_finite_value(self) -> bool {
                self.is_finite()
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

element_int_impl!(i8, Int8);
element_int_impl!(u8, UInt8);
element_int_impl!(i16, Int16);
element_int_impl!(u16, UInt16);
element_int_impl!(i32, Int32);
element_int_impl!(u32, UInt32);
element_int_impl!(i64, Int64);
element_int_impl!(u64, UInt64);
element_float_impl!(f32, Float32);
element_float_impl!(f64, Float64);
