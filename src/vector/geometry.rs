//! Geometric operations.
//!
//! Reductions that feed magnitudes ([`dot`](Vector::dot),
//! [`absolute_squared`](Vector::absolute_squared)) run in the promoted kind,
//! so narrow integer vectors accumulate in i32 and half vectors in f32.
//! Magnitudes themselves are reported in the per-kind `Mag` floating kind
//! (integers get f64), which is what makes `normalize` meaningful for
//! integer vectors.
//!
//! The constructions on top (reflection, refraction, interpolation,
//! coordinate conversion) are floating-kind only and compute componentwise
//! in the operand kind.

use num_traits::{Float, One, Zero};
use tracing::trace;

use super::types::{LaneCount, SupportedLaneCount, Vector};
use crate::scalar::{CastFrom, Real, Scalar};

// ============================================================================
// Magnitude family, any kind
// ============================================================================

impl<T: Scalar, const N: usize> Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Sum of pairwise products, accumulated in the promoted kind with
    /// wrapping integer semantics.
    pub fn dot(self, rhs: Self) -> T::Widened {
        let mut acc = T::Widened::zero();
        for i in 0..N {
            let a = T::Widened::cast_from(self.0[i]);
            let b = T::Widened::cast_from(rhs.0[i]);
            acc = acc.wrapping_add(a.wrapping_mul(b));
        }
        acc
    }

    /// `dot(self, self)`: squared Euclidean magnitude in the promoted kind.
    pub fn absolute_squared(self) -> T::Widened {
        self.dot(self)
    }

    /// Euclidean magnitude, in the magnitude kind (f64 for integer
    /// vectors, f32 for f16).
    pub fn absolute(self) -> T::Mag {
        T::Mag::cast_from(self.absolute_squared()).sqrt()
    }

    /// Unit-length copy in the magnitude kind. Vectors whose magnitude is
    /// within the kind's epsilon of zero normalize to the zero vector
    /// instead of dividing into infinities.
    pub fn normalize(self) -> Vector<T::Mag, N> {
        let magnitude = self.absolute();
        if magnitude <= T::Mag::epsilon() {
            trace!(kind = %T::KIND, "degenerate magnitude, normalizing to zero");
            return Vector::zero();
        }
        self.map(|c| T::Mag::cast_from(c) / magnitude)
    }
}

// ============================================================================
// Constructions, floating kinds
// ============================================================================

impl<T: Real, const N: usize> Vector<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Dot product staying in the operand kind; feeds the constructions
    /// below so an f16 reflection stays f16.
    fn dot_in_kind(self, rhs: Self) -> T {
        self.zip(rhs, |a, b| a * b).fold(T::zero(), |acc, c| acc + c)
    }

    /// Mirror `self` across the plane with unit normal `normal`:
    /// `v - 2·(v·n)·n`.
    pub fn reflect(self, normal: Self) -> Self {
        let two = T::one() + T::one();
        let d = self.dot_in_kind(normal);
        self.zip(normal.map(|c| c * two * d), |a, b| a - b)
    }

    /// Refract through the surface with unit normal `normal` at relative
    /// index `eta`. Total internal reflection yields the zero vector.
    pub fn refract(self, normal: Self, eta: T) -> Self {
        let cos1 = self.dot_in_kind(normal);
        let radicand = T::one() - eta * eta * (T::one() - cos1 * cos1);
        if radicand < T::zero() {
            return Self::zero();
        }
        let k = radicand.sqrt() - eta * cos1;
        self.map(|c| c * eta).zip(normal.map(|c| c * k), |a, b| a + b)
    }

    /// Linear interpolation `(1-t)·self + t·rhs`. `t` is not clamped;
    /// values outside `[0, 1]` extrapolate.
    pub fn lerp(self, rhs: Self, t: T) -> Self {
        let s = T::one() - t;
        self.map(|c| c * s).zip(rhs.map(|c| c * t), |a, b| a + b)
    }

    /// Barycentric combination `(1-u-v)·p1 + u·p2 + v·p3`.
    pub fn barycentric(p1: Self, p2: Self, p3: Self, u: T, v: T) -> Self {
        let w = T::one() - u - v;
        p1.map(|c| c * w)
            .zip(p2.map(|c| c * u), |a, b| a + b)
            .zip(p3.map(|c| c * v), |a, b| a + b)
    }
}

// ============================================================================
// Coordinate-space conversions
// ============================================================================

/// Angles from `atan2` land in `(-π, π]`; fold the negative half up by a
/// full turn so callers always see `[0, 2π)`.
fn wrap_angle<T: Real>(angle: T) -> T {
    if angle < T::zero() {
        angle + T::tau()
    } else {
        angle
    }
}

impl<T: Real> Vector<T, 2> {
    /// Polar form `(radius, azimuth)`, azimuth in `[0, 2π)`.
    pub fn to_polar(self) -> Vector<T, 2> {
        let [x, y] = self.into_array();
        let radius = (x * x + y * y).sqrt();
        Vector::new([radius, wrap_angle(y.atan2(x))])
    }
}

impl<T: Real> Vector<T, 3> {
    /// Spherical form `(radius, inclination, azimuth)`: inclination is the
    /// angle from the +z axis, `acos(z / radius)`; azimuth in `[0, 2π)`.
    /// The zero vector has no direction and yields NaN angles.
    pub fn to_spherical(self) -> Vector<T, 3> {
        let [x, y, z] = self.into_array();
        let radius = (x * x + y * y + z * z).sqrt();
        Vector::new([radius, (z / radius).acos(), wrap_angle(y.atan2(x))])
    }
}
