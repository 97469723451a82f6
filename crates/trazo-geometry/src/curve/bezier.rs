//! Quadratic and cubic Bézier curve evaluators.
//!
//! Both evaluators weight their control points with the Bernstein basis
//! of the matching degree. The basis is computed as a separate scalar
//! step so shared powers of `t` and `1 - t` are reused and the weighted
//! vector sum stays identical between point and tangent evaluation.

use serde::{Deserialize, Serialize};
use trazo_math::{Point3, Vector3};

use super::Curve;

/// A quadratic Bézier curve with exactly 3 control points,
/// parameterized over `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub control_points: [Point3; 3],
}

impl QuadraticBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self {
            control_points: [p0, p1, p2],
        }
    }

    /// Bernstein basis of degree 2 at `t`.
    fn basis(t: f64) -> [f64; 3] {
        let u = 1.0 - t;
        [u * u, 2.0 * t * u, t * t]
    }

    /// Derivative of the degree 2 basis at `t`.
    fn basis_derivative(t: f64) -> [f64; 3] {
        [-2.0 * (1.0 - t), 2.0 - 4.0 * t, 2.0 * t]
    }

    fn weighted_sum(&self, w: [f64; 3]) -> Point3 {
        let [p0, p1, p2] = self.control_points;
        p0 * w[0] + p1 * w[1] + p2 * w[2]
    }

    /// Approximate the curve by `segments + 1` uniformly spaced vertices.
    ///
    /// The first and last vertex are the endpoint control points, taken
    /// exactly rather than evaluated. `segments` must be at least 1, the
    /// caller checks.
    pub fn approximate(&self, segments: usize) -> Vec<Point3> {
        let delta_t = 1.0 / segments as f64;
        let mut vertices = Vec::with_capacity(segments + 1);
        vertices.push(self.control_points[0]);
        for segment in 1..segments {
            vertices.push(self.point_at(delta_t * segment as f64));
        }
        vertices.push(self.control_points[2]);
        vertices
    }

    /// A new curve with reversed control point order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let [p0, p1, p2] = self.control_points;
        Self::new(p2, p1, p0)
    }
}

impl Curve for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point3 {
        self.weighted_sum(Self::basis(t))
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.weighted_sum(Self::basis_derivative(t))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// A cubic Bézier curve with exactly 4 control points,
/// parameterized over `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicBezier {
    pub control_points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            control_points: [p0, p1, p2, p3],
        }
    }

    /// Bernstein basis of degree 3 at `t`.
    fn basis(t: f64) -> [f64; 4] {
        let t2 = t * t;
        let u = 1.0 - t;
        let u2 = u * u;
        [u2 * u, 3.0 * u2 * t, 3.0 * u * t2, t2 * t]
    }

    /// Derivative of the degree 3 basis at `t`.
    fn basis_derivative(t: f64) -> [f64; 4] {
        let t2 = t * t;
        let u = 1.0 - t;
        [
            -3.0 * u * u,
            3.0 * (1.0 - 4.0 * t + 3.0 * t2),
            3.0 * t * (2.0 - 3.0 * t),
            3.0 * t2,
        ]
    }

    fn weighted_sum(&self, w: [f64; 4]) -> Point3 {
        let [p0, p1, p2, p3] = self.control_points;
        p0 * w[0] + p1 * w[1] + p2 * w[2] + p3 * w[3]
    }

    /// Approximate the curve by `segments + 1` uniformly spaced vertices.
    ///
    /// The first and last vertex are the endpoint control points, taken
    /// exactly rather than evaluated. `segments` must be at least 1, the
    /// caller checks.
    pub fn approximate(&self, segments: usize) -> Vec<Point3> {
        let delta_t = 1.0 / segments as f64;
        let mut vertices = Vec::with_capacity(segments + 1);
        vertices.push(self.control_points[0]);
        for segment in 1..segments {
            vertices.push(self.point_at(delta_t * segment as f64));
        }
        vertices.push(self.control_points[3]);
        vertices
    }

    /// A new curve with reversed control point order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let [p0, p1, p2, p3] = self.control_points;
        Self::new(p3, p2, p1, p0)
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        self.weighted_sum(Self::basis(t))
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.weighted_sum(Self::basis_derivative(t))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
