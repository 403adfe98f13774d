//! API request/response types

mod error;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
