//! Validating boundary for curve evaluation.
//!
//! The evaluators never inspect their parameter, so all rejection and
//! clamping of untrusted input lives here. Collaborators route through
//! this module before touching the evaluation core.

use trazo_core::tolerance::MAX_SPLINE_ORDER;
use trazo_core::traits::Validate;
use trazo_core::{Result, TrazoError};
use trazo_math::{Point3, Vector3};

use super::{CubicBezier, Curve, QuadraticBezier};

/// Evaluate a curve point, rejecting parameters outside the domain.
pub fn point_checked(curve: &dyn Curve, t: f64) -> Result<Point3> {
    check_parameter(curve, t)?;
    Ok(curve.point_at(t))
}

/// Evaluate a curve tangent, rejecting parameters outside the domain.
pub fn tangent_checked(curve: &dyn Curve, t: f64) -> Result<Vector3> {
    check_parameter(curve, t)?;
    Ok(curve.tangent_at(t))
}

/// Evaluate a curve point, clamping the parameter into the domain.
pub fn point_clamped(curve: &dyn Curve, t: f64) -> Point3 {
    let (min, max) = curve.domain();
    curve.point_at(t.clamp(min, max))
}

/// Evaluate a curve tangent, clamping the parameter into the domain.
pub fn tangent_clamped(curve: &dyn Curve, t: f64) -> Vector3 {
    let (min, max) = curve.domain();
    curve.tangent_at(t.clamp(min, max))
}

/// Check a spline order (degree + 1) against [`MAX_SPLINE_ORDER`].
///
/// Composite-curve construction calls this before assembling segments
/// from the evaluators.
pub fn check_spline_order(order: usize) -> Result<()> {
    if order > MAX_SPLINE_ORDER {
        return Err(TrazoError::SplineOrderExceeded {
            order,
            max: MAX_SPLINE_ORDER,
        });
    }
    Ok(())
}

fn check_parameter(curve: &dyn Curve, t: f64) -> Result<()> {
    let (min, max) = curve.domain();
    // RangeInclusive::contains is false for NaN, which must not slip
    // through to the evaluators
    if !(min..=max).contains(&t) {
        return Err(TrazoError::ParameterOutOfRange { t, min, max });
    }
    Ok(())
}

fn check_finite(points: &[Point3]) -> Result<()> {
    for p in points {
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(TrazoError::Geometry(format!(
                "control point {p:?} is not finite"
            )));
        }
    }
    Ok(())
}

impl Validate for QuadraticBezier {
    fn validate(&self) -> Result<()> {
        check_finite(&self.control_points)
    }
}

impl Validate for CubicBezier {
    fn validate(&self) -> Result<()> {
        check_finite(&self.control_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trazo_math::Vec3;

    fn unit_cubic() -> CubicBezier {
        CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_point_checked_accepts_domain() {
        let curve = unit_cubic();
        assert!(point_checked(&curve, 0.0).is_ok());
        assert!(point_checked(&curve, 0.5).is_ok());
        assert!(point_checked(&curve, 1.0).is_ok());
    }

    #[test]
    fn test_point_checked_rejects_out_of_range() {
        let curve = unit_cubic();
        for t in [-0.1, 1.1, f64::NAN] {
            let err = point_checked(&curve, t).unwrap_err();
            assert!(
                matches!(err, TrazoError::ParameterOutOfRange { .. }),
                "unexpected error for t={}: {:?}",
                t,
                err
            );
        }
    }

    #[test]
    fn test_tangent_checked() {
        let curve = unit_cubic();
        assert!(tangent_checked(&curve, 0.25).is_ok());
        assert!(tangent_checked(&curve, 2.0).is_err());
    }

    #[test]
    fn test_clamped_evaluation() {
        let curve = unit_cubic();
        assert_eq!(point_clamped(&curve, -5.0), curve.point_at(0.0));
        assert_eq!(point_clamped(&curve, 5.0), curve.point_at(1.0));
        assert_eq!(point_clamped(&curve, 0.5), curve.point_at(0.5));
        assert_eq!(tangent_clamped(&curve, 2.0), curve.tangent_at(1.0));
    }

    #[test]
    fn test_check_spline_order() {
        assert!(check_spline_order(2).is_ok());
        assert!(check_spline_order(MAX_SPLINE_ORDER).is_ok());
        let err = check_spline_order(13).unwrap_err();
        assert!(matches!(
            err,
            TrazoError::SplineOrderExceeded { order: 13, max: 12 }
        ));
    }

    #[test]
    fn test_validate_finite_control_points() {
        assert!(unit_cubic().validate().is_ok());

        let bad = QuadraticBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(f64::NAN, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!(matches!(
            bad.validate().unwrap_err(),
            TrazoError::Geometry(_)
        ));

        let inf = CubicBezier::new(
            Vec3::ZERO,
            Vec3::new(f64::INFINITY, 0.0, 0.0),
            Vec3::X,
            Vec3::Y,
        );
        assert!(inf.validate().is_err());
    }
}
