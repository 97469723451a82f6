use crate::error::Result;

/// Validate structural integrity of a geometric entity.
///
/// Implemented by boundary-facing types; the evaluation core never calls
/// this and stays free of input checks.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
