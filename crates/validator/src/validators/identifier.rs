//! Identifier syntax validators
//!
//! - [`Uuid`]: RFC 4122 UUIDs restricted to the accepted versions
//! - [`ObjectId`]: 12-byte document-store ids in 24 hex digit form

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// UUID VALIDATOR
// ============================================================================

/// Validates UUID strings of the accepted versions (v1 and v4 by default).
///
/// Parsing is delegated to the `uuid` crate, so the simple, hyphenated,
/// braced and URN forms are all understood. [`Uuid::hyphenated_only`]
/// narrows that to `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
///
/// # Examples
///
/// ```rust
/// use chainval_validator::foundation::Validate;
/// use chainval_validator::validators::Uuid;
///
/// let validator = Uuid::new();
/// assert!(validator.validate("f47ac10b-58cc-4372-a567-0e02b2c3d479").is_ok());
/// assert!(validator.validate("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uuid {
    versions: Vec<usize>,
    hyphenated_only: bool,
}

impl Uuid {
    /// Creates a validator accepting v1 and v4 UUIDs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            versions: vec![1, 4],
            hyphenated_only: false,
        }
    }

    /// Replaces the accepted version set.
    #[must_use = "builder methods must be chained or built"]
    pub fn versions(mut self, versions: &[usize]) -> Self {
        self.versions = versions.to_vec();
        self
    }

    /// Only accept the canonical 36 character hyphenated form.
    #[must_use = "builder methods must be chained or built"]
    pub fn hyphenated_only(mut self, hyphenated_only: bool) -> Self {
        self.hyphenated_only = hyphenated_only;
        self
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Uuid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.hyphenated_only && input.len() != 36 {
            return Err(ValidationError::invalid_format("", "uuid")
                .with_param("reason", "expected hyphenated form"));
        }

        let parsed = uuid::Uuid::try_parse(input).map_err(|e| {
            ValidationError::invalid_format("", "uuid").with_param("reason", e.to_string())
        })?;

        if parsed.get_variant() != uuid::Variant::RFC4122 {
            return Err(ValidationError::invalid_format("", "uuid")
                .with_param("reason", "unsupported variant"));
        }

        let version = parsed.get_version_num();
        if self.versions.contains(&version) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "uuid_version",
                format!("UUID version {version} is not accepted"),
            )
            .with_param("actual", version.to_string()))
        }
    }
}

// ============================================================================
// OBJECT ID VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a document-store object id: exactly 24 hexadecimal digits.
    pub ObjectId for str;
    rule(input) { input.len() == 24 && input.bytes().all(|b| b.is_ascii_hexdigit()) }
    error(input) {
        ValidationError::invalid_format("", "object_id")
            .with_param("actual_length", input.len().to_string())
    }
    fn object_id();
}
