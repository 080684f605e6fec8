//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use json::{Json, JsonRejection};
pub use user::{MessageResponse, UserResponse};
