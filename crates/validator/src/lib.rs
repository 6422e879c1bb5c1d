//! # chainval-validator
//!
//! Fluent, chainable field validation over dynamic values.
//!
//! ## Quick Start
//!
//! ```rust
//! use chainval_validator::{ErrorMessages, Value, validate, validate_prefixed};
//!
//! let messages = ErrorMessages::new("is required", "is invalid");
//! let mut errors = Vec::new();
//!
//! validate_prefixed("not-an-email", &messages, &mut errors, "email ").is_email();
//! validate_prefixed(Value::Null, &messages, &mut errors, "nickname ")
//!     .is_optional()
//!     .is_string(Some(2), Some(30));
//! validate(vec!["read", "admin"], &messages, &mut errors)
//!     .is_array_match(&["read", "write"])
//!     .expect("static pattern is valid");
//!
//! assert_eq!(errors, vec!["email is invalid".to_string(), "is invalid".to_string()]);
//! ```
//!
//! ## Layers
//!
//! - [`chain`]: the [`ValidationChain`] state machine and the
//!   missing-value policy
//! - [`schema`]: the [`PrimitiveSchema`](schema::PrimitiveSchema) seam the
//!   chain asks syntax questions through
//! - [`validators`]: primitive validators behind the standard schema
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, errors
//!   and value narrowing
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//! Plug them into a chain through [`ValidationChain::custom`] or a custom
//! [`PrimitiveSchema`](schema::PrimitiveSchema).

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod combinators;
pub mod foundation;
mod json;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
pub mod value;

pub use chain::{ContractViolation, ErrorMessages, ValidationChain, validate, validate_prefixed};
pub use schema::{PrimitiveSchema, SchemaConfig, StandardSchema};
pub use validators::LengthMode;
pub use value::{ObjectMap, Value};
