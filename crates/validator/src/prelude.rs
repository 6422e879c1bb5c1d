//! Prelude module for convenient imports.
//!
//! Provides a single `use chainval_validator::prelude::*;` import that brings
//! in the chain, its message and error types, the schema seam and the
//! primitive validators.
//!
//! # Examples
//!
//! ```rust
//! use chainval_validator::prelude::*;
//!
//! let messages = ErrorMessages::new("name is required", "name is invalid");
//! let mut errors = Vec::new();
//! let ok = validate("alice", &messages, &mut errors).is_string(Some(3), Some(20)).valid();
//! assert!(ok);
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//! ```

// ============================================================================
// CHAIN
// ============================================================================

pub use crate::chain::{
    ContractViolation, ErrorMessages, ValidationChain, validate, validate_prefixed,
};
pub use crate::value::{ObjectMap, Value};

// ============================================================================
// SCHEMA
// ============================================================================

pub use crate::schema::{PrimitiveSchema, SchemaConfig, StandardSchema};

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{AsValidatable, Validate, ValidateExt, ValidationError};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, and};
