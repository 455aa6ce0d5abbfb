//! Path tracing helpers on top of glam's `Vec3`.
//!
//! glam already provides the component-wise arithmetic, dot/cross products
//! and normalization. This module adds the handful of operations the
//! renderer needs that glam doesn't spell the same way.

use crate::Vec3;

/// A position in 3D space.
///
/// Same type as [`Vec3`]; the alias only documents intent at call sites.
pub type Point3 = Vec3;

/// Components smaller than this are treated as zero by [`VecExt::near_zero`].
const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Extension methods used by scattering and intersection code.
pub trait VecExt: Sized {
    /// True if every component is within 1e-8 of zero.
    fn near_zero(&self) -> bool;

    /// Normalize, asserting non-zero length in debug builds.
    ///
    /// Callers must guard degenerate vectors themselves (see
    /// [`VecExt::near_zero`]); release builds produce NaNs instead of
    /// panicking.
    fn unit(self) -> Self;

    /// Mirror this vector about the normal `n`: `v - 2(v·n)n`.
    fn reflect(self, n: Self) -> Self;

    /// Refract a unit vector through a surface with normal `n`.
    ///
    /// `eta_ratio` is η/η' (incident over transmitted). The result is split
    /// into the components perpendicular and parallel to the normal.
    fn refract(self, n: Self, eta_ratio: f32) -> Self;

    /// Component-wise comparison within `epsilon`.
    fn almost_eq(&self, other: Self, epsilon: f32) -> bool;
}

impl VecExt for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.abs().max_element() < NEAR_ZERO_EPSILON
    }

    #[inline]
    fn unit(self) -> Self {
        debug_assert!(
            self.length_squared() > 0.0,
            "attempted to normalize a zero-length vector"
        );
        self / self.length()
    }

    #[inline]
    fn reflect(self, n: Self) -> Self {
        self - 2.0 * self.dot(n) * n
    }

    #[inline]
    fn refract(self, n: Self, eta_ratio: f32) -> Self {
        let cos_theta = (-self).dot(n).min(1.0);
        let r_out_perp = eta_ratio * (self + cos_theta * n);
        let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
        r_out_perp + r_out_parallel
    }

    #[inline]
    fn almost_eq(&self, other: Self, epsilon: f32) -> bool {
        (*self - other).abs().max_element() <= epsilon
    }
}
