//! The cross-kind conversion lattice, in two layers.
//!
//! [`CastFrom`] is total: every ordered pair of the eleven kinds has an
//! impl, so any vector can be converted to any kind explicitly. Narrowing
//! semantics are the language's `as` semantics: integer casts keep the low
//! target bits (wrap modulo the target width), float-to-integer casts
//! truncate toward zero and clamp at the target bounds (NaN to zero),
//! float-to-float casts round to nearest. Half-precision routes through
//! f32/f64, which is exact in the widening direction.
//!
//! [`WidensTo`] is the partial order on top: a marker implemented only for
//! the pairs where range and precision embed exactly. `Vector::widen`
//! requires it; `Vector::convert` does not. The runtime mirror is
//! [`ScalarKind::widens_to`](super::ScalarKind::widens_to).

use half::f16;

use super::traits::Scalar;

/// Per-component scalar conversion, defined for every ordered kind pair.
pub trait CastFrom<T: Scalar>: Scalar {
    fn cast_from(value: T) -> Self;
}

/// Marker for value-preserving conversions. `T: WidensTo<U>` means every
/// value of `T` maps to exactly one `U` and back.
pub trait WidensTo<U: Scalar>: Scalar {}

// ============================================================================
// CastFrom: primitive × primitive
// ============================================================================

macro_rules! cast_with_as {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )+
    };
}

cast_with_as!(i8  => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(u8  => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(i16 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(u16 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(i32 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(u32 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(i64 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(u64 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(f32 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_with_as!(f64 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

// ============================================================================
// CastFrom: half-precision rows
// ============================================================================

macro_rules! cast_from_f16 {
    ($($dst:ty),+ $(,)?) => {
        $(
            impl CastFrom<f16> for $dst {
                #[inline]
                fn cast_from(value: f16) -> Self {
                    f32::from(value) as $dst
                }
            }
        )+
    };
}

macro_rules! cast_to_f16 {
    ($($src:ty),+ $(,)?) => {
        $(
            impl CastFrom<$src> for f16 {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    f16::from_f64(value as f64)
                }
            }
        )+
    };
}

cast_from_f16!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast_to_f16!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl CastFrom<f16> for f16 {
    #[inline]
    fn cast_from(value: f16) -> Self {
        value
    }
}

// ============================================================================
// WidensTo: the value-preserving edges
// ============================================================================
//
// Must stay in lockstep with `ScalarKind::widens_to`; `vector::convert`
// tests pin the agreement. Reflexive edges are included so identity
// conversions go through the widening path.

macro_rules! widens {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(impl WidensTo<$dst> for $src {})+
    };
}

widens!(i8  => i8, i16, i32, i64, f32, f64);
widens!(u8  => u8, i16, u16, i32, u32, i64, u64, f32, f64);
widens!(i16 => i16, i32, i64, f32, f64);
widens!(u16 => u16, i32, u32, i64, u64, f32, f64);
widens!(i32 => i32, i64, f64);
widens!(u32 => u32, i64, u64, f64);
widens!(i64 => i64);
widens!(u64 => u64);
widens!(f16 => f16, f32, f64);
widens!(f32 => f32, f64);
widens!(f64 => f64);
