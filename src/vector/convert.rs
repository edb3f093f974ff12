//! Cross-kind vector conversion.
//!
//! Two entry points over the same per-component cast:
//!
//! - [`convert`](Vector::convert) accepts any target kind and may lose
//!   information (wrap, truncate, round);
//! - [`widen`](Vector::widen) additionally requires the `WidensTo` edge and
//!   is therefore guaranteed value-preserving; converting back down
//!   reproduces the original exactly.

use super::types::{LaneCount, SupportedLaneCount, Vector};
use crate::scalar::{CastFrom, Scalar, ScalarKind, WidensTo};

impl<T: Scalar, const N: usize> Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Runtime kind of the components.
    pub fn kind(&self) -> ScalarKind {
        T::KIND
    }

    /// Cast every component to kind `U`. Defined for every ordered pair of
    /// kinds; narrowing follows the lattice rules (integer wrap, truncation
    /// toward zero, rounding).
    #[inline]
    pub fn convert<U>(self) -> Vector<U, N>
    where
        U: Scalar + CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Value-preserving cast to a wider kind. Compiles only along widening
    /// edges of the lattice, so the result always converts back to `self`.
    #[inline]
    pub fn widen<U>(self) -> Vector<U, N>
    where
        U: Scalar + CastFrom<T>,
        T: WidensTo<U>,
    {
        self.map(U::cast_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    /// The associated-type promotion must agree with the runtime table for
    /// every kind; the two views are maintained by hand.
    #[test]
    fn promotion_table_matches_associated_types() {
        macro_rules! check {
            ($($t:ty),+ $(,)?) => {
                $(
                    assert_eq!(
                        <<$t as Scalar>::Widened as Scalar>::KIND,
                        <$t as Scalar>::KIND.promoted(),
                        "promotion mismatch for {}",
                        <$t as Scalar>::KIND,
                    );
                )+
            };
        }
        check!(i8, u8, i16, u16, i32, u32, i64, u64, f16, f32, f64);
    }

    #[test]
    fn magnitude_kind_is_floating_and_wide_enough() {
        macro_rules! check {
            ($($t:ty => $mag:ident),+ $(,)?) => {
                $(
                    assert_eq!(
                        <<$t as Scalar>::Mag as Scalar>::KIND,
                        ScalarKind::$mag,
                    );
                )+
            };
        }
        check!(
            i8 => F64, u8 => F64, i16 => F64, u16 => F64,
            i32 => F64, u32 => F64, i64 => F64, u64 => F64,
            f16 => F32, f32 => F32, f64 => F64,
        );
    }

    #[test]
    fn widening_round_trips_exactly() {
        let v: Vector<u8, 3> = Vector::new([1, 2, 3]);
        let wide: Vector<i64, 3> = v.widen();
        assert_eq!(wide.into_array(), [1, 2, 3]);
        let back: Vector<u8, 3> = wide.convert();
        assert_eq!(back, v);

        let h: Vector<f16, 2> = Vector::new([f16::from_f32(0.5), f16::from_f32(-2.0)]);
        let wide: Vector<f64, 2> = h.widen();
        let back: Vector<f16, 2> = wide.convert();
        assert_eq!(back, h);
    }

    #[test]
    fn narrowing_wraps_per_component() {
        let v: Vector<i32, 4> = Vector::new([300, -1, 255, 256]);
        let bytes: Vector<u8, 4> = v.convert();
        assert_eq!(bytes.into_array(), [44, 255, 255, 0]);
    }

    #[test]
    fn float_narrowing_truncates_toward_zero() {
        let v: Vector<f64, 3> = Vector::new([2.9, -2.9, 0.4]);
        let ints: Vector<i16, 3> = v.convert();
        assert_eq!(ints.into_array(), [2, -2, 0]);
    }

    #[test]
    fn identity_conversion_is_a_widen() {
        let v: Vector<u64, 2> = Vector::new([u64::MAX, 0]);
        assert_eq!(v.widen::<u64>(), v);
    }
}
