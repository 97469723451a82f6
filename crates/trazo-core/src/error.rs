use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrazoError {
    #[error("Parameter {t} out of range [{min}, {max}]")]
    ParameterOutOfRange { t: f64, min: f64, max: f64 },

    #[error("Spline order {order} exceeds supported maximum {max}")]
    SplineOrderExceeded { order: usize, max: usize },

    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, TrazoError>;
