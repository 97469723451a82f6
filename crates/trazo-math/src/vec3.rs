//! Immutable 3D vector value type.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use trazo_core::tolerance::{self, ABS_TOLERANCE, REL_TOLERANCE};

/// A 3D vector of `f64` components with value semantics.
///
/// Every operation returns a new vector, nothing mutates in place. All
/// operations are total over finite doubles; NaN and infinity propagate
/// per IEEE-754 and are never rejected here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Squared length, avoids the square root where only relative
    /// magnitudes matter.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the vector scaled so its magnitude equals `length`.
    ///
    /// The zero vector is returned unchanged instead of dividing by zero,
    /// which would poison downstream math with NaN.
    #[must_use]
    pub fn normalize_to(self, length: f64) -> Self {
        let magnitude = self.length();
        if magnitude == 0.0 {
            return self;
        }
        self * (length / magnitude)
    }

    /// Returns the unit vector; the zero vector is returned unchanged.
    #[must_use]
    pub fn normalize(self) -> Self {
        self.normalize_to(1.0)
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> f64 {
        (rhs - self).length()
    }

    /// Linear interpolation: `self` at factor 0, `rhs` at factor 1.
    ///
    /// `factor` is not clamped, values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, rhs: Self, factor: f64) -> Self {
        self + (rhs - self) * factor
    }

    /// Approximate equality on all three axes.
    ///
    /// An axis passes if the difference is within `abs_tol` or within
    /// [`REL_TOLERANCE`] relative to either operand (see
    /// [`tolerance::is_close`]).
    pub fn is_close(self, rhs: Self, abs_tol: f64) -> bool {
        tolerance::is_close(self.x, rhs.x, abs_tol)
            && tolerance::is_close(self.y, rhs.y, abs_tol)
            && tolerance::is_close(self.z, rhs.z, abs_tol)
    }

    /// `true` if all components are within [`ABS_TOLERANCE`] of zero.
    pub fn is_null(self) -> bool {
        self.x.abs() <= ABS_TOLERANCE
            && self.y.abs() <= ABS_TOLERANCE
            && self.z.abs() <= ABS_TOLERANCE
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ABS_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f64 {
        REL_TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
