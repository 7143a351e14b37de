//! Shared types for the signup client: form model, validation schema and API errors.

pub mod error;
pub mod models;
pub mod validation;

pub use error::*;
pub use models::*;
pub use validation::*;
