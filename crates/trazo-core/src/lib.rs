pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, TrazoError};
pub use traits::Validate;
