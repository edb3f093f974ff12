//! The compile-time scalar contract.
//!
//! [`Scalar`] is what a vector component must provide: identity constants
//! (through `num_traits::Zero`/`One`), wrapping arithmetic for the silent
//! integer overflow model, raw-bit access for the pack codec, and two
//! associated kinds:
//!
//! - `Widened`: the operator result kind. Binary operators cast both
//!   operands here before computing, so `u8 + u8` runs in i32.
//! - `Mag`: the floating kind magnitudes are reported in. Integer kinds get
//!   f64; f16 gets f32 to match its promoted arithmetic.
//!
//! [`Real`] marks the three floating kinds and layers `num_traits::Float`
//! on top, plus the few operations `Float` lacks. `half::f16` qualifies
//! through the `num-traits` feature of the `half` crate, with arithmetic
//! computed through f32 internally.

use std::fmt;
use std::ops::Div;

use half::f16;
use num_traits::{Float, One, Zero};

use super::cast::CastFrom;
use super::kind::ScalarKind;

// ============================================================================
// Scalar
// ============================================================================

/// A numeric type usable as a vector component.
///
/// Implemented for the ten primitive integer/float types and `half::f16`;
/// the set is closed by construction (every impl lives in this module).
pub trait Scalar:
    Copy
    + PartialOrd
    + Zero
    + One
    + Div<Output = Self>
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Runtime mirror of this kind.
    const KIND: ScalarKind;

    /// Result kind of binary arithmetic operators over this kind.
    type Widened: Scalar + CastFrom<Self>;

    /// Floating kind magnitudes and normalized vectors are reported in.
    type Mag: Real + CastFrom<Self> + CastFrom<Self::Widened>;

    /// Addition that wraps at the kind's width. Plain IEEE addition for
    /// floating kinds.
    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Negation; the minimum signed value maps to itself.
    fn wrapping_neg(self) -> Self;

    /// Absolute value. Identity for unsigned kinds; the minimum signed
    /// value maps to itself (wrap semantics, same as negation).
    fn abs(self) -> Self;

    /// The component's native bit pattern, zero-extended to 64 bits.
    /// Signed integers contribute their two's-complement pattern, floats
    /// their IEEE encoding.
    fn to_bits(self) -> u64;

    /// Inverse of [`to_bits`](Self::to_bits); bits above the native width
    /// are ignored.
    fn from_bits(bits: u64) -> Self;
}

// ============================================================================
// Real
// ============================================================================

/// Floating scalar kinds: f16, f32, f64.
pub trait Real: Scalar + Float {
    /// Rounds half-way cases to the nearest even value (banker's rounding).
    /// `Float::round` covers the away-from-zero rule.
    fn round_ties_even(self) -> Self;

    /// `10^n`, used to scale digit-count rounding.
    fn exp10(n: i32) -> Self;

    /// Full turn, for folding angles into `[0, 2π)`.
    fn tau() -> Self;
}

// ============================================================================
// Integer impls
// ============================================================================

macro_rules! impl_scalar_int {
    ($($t:ty => $ut:ty, $kind:ident, $widened:ty, $abs:expr);+ $(;)?) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;
                type Widened = $widened;
                type Mag = f64;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                #[inline]
                fn abs(self) -> Self {
                    ($abs)(self)
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $ut as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $ut as $t
                }
            }
        )+
    };
}

impl_scalar_int! {
    i8  => u8,  I8,  i32, |v: i8| v.wrapping_abs();
    u8  => u8,  U8,  i32, |v: u8| v;
    i16 => u16, I16, i32, |v: i16| v.wrapping_abs();
    u16 => u16, U16, i32, |v: u16| v;
    i32 => u32, I32, i32, |v: i32| v.wrapping_abs();
    u32 => u32, U32, u32, |v: u32| v;
    i64 => u64, I64, i64, |v: i64| v.wrapping_abs();
    u64 => u64, U64, u64, |v: u64| v;
}

// ============================================================================
// Floating impls
// ============================================================================

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;
    type Widened = f32;
    type Mag = f32;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        -self
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;
    type Widened = f64;
    type Mag = f64;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        -self
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

impl Scalar for f16 {
    const KIND: ScalarKind = ScalarKind::F16;
    type Widened = f32;
    type Mag = f32;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        -self
    }

    #[inline]
    fn abs(self) -> Self {
        Float::abs(self)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f16::to_bits(self) as u64
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f16::from_bits(bits as u16)
    }
}

impl Real for f32 {
    #[inline]
    fn round_ties_even(self) -> Self {
        f32::round_ties_even(self)
    }

    #[inline]
    fn exp10(n: i32) -> Self {
        10f32.powi(n)
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }
}

impl Real for f64 {
    #[inline]
    fn round_ties_even(self) -> Self {
        f64::round_ties_even(self)
    }

    #[inline]
    fn exp10(n: i32) -> Self {
        10f64.powi(n)
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }
}

impl Real for f16 {
    #[inline]
    fn round_ties_even(self) -> Self {
        f16::from_f32(f32::from(self).round_ties_even())
    }

    #[inline]
    fn exp10(n: i32) -> Self {
        f16::from_f32(10f32.powi(n))
    }

    #[inline]
    fn tau() -> Self {
        f16::from_f32(std::f32::consts::TAU)
    }
}
