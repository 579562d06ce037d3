mod app_error;
mod validation_error;

pub use app_error::{AppError, FALLBACK_MESSAGE, REQUIRED_MESSAGE};
pub use validation_error::ValidationError;
