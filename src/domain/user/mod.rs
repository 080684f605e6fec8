//! User domain
//!
//! This module provides domain types and traits for user registration,
//! including the user entity, payload validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{validate_registration, Credentials, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
