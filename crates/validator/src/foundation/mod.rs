//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type. The chain drives them
//! through [`Validate::validate_any`] so a dynamic [`Value`](crate::Value)
//! is narrowed to the validator's input before the rule runs.

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use validatable::AsValidatable;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
