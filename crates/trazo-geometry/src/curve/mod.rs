//! Curve traits and implementations.

mod bezier;
pub mod checked;

use trazo_math::{Point3, Vector3};

pub use bezier::{CubicBezier, QuadraticBezier};

/// Trait for parametric curves in 3D space.
///
/// `point_at` and `tangent_at` are the unchecked evaluation core: pure
/// functions of the control points and `t`, with no caching and no
/// synchronization. The parameter is expected inside `domain()`; callers
/// with untrusted input clamp or validate through [`checked`] first. An
/// out of range parameter still evaluates the underlying polynomial,
/// which extrapolates the curve.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    ///
    /// The result is not normalized; compose with `Vec3::normalize` when
    /// a unit tangent is needed.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
