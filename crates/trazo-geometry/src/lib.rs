//! Trazo geometry: parametric curves and Bézier evaluation.

pub mod curve;

pub use curve::Curve;
