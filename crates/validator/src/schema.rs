//! Primitive schema seam
//!
//! The chain never inspects syntax itself. Every format or shape question is
//! asked through [`PrimitiveSchema`], which answers with `Ok(())` or a
//! structured [`ValidationError`]. [`StandardSchema`] answers with the
//! crate's built-in validators and is tuned by [`SchemaConfig`].

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationResult};
use crate::validators::{
    Duration, DurationError, Email, LengthMode, StringLength, Uuid, email, finite, is_array,
    is_object, iso_date, object_id, parse_duration, safe_integer, strict_boolean, whole_number,
};
use crate::value::Value;

/// Primitive syntax and shape checks consumed by the chain.
///
/// Implementations only see present values; the chain resolves missing
/// values before calling in.
pub trait PrimitiveSchema {
    /// A string, optionally bounded in length.
    fn string(&self, value: &Value, min: Option<usize>, max: Option<usize>)
    -> ValidationResult<()>;

    /// A finite integral number.
    fn integer(&self, value: &Value) -> ValidationResult<()>;

    /// A finite number.
    fn number(&self, value: &Value) -> ValidationResult<()>;

    /// An ISO 8601 date or date-time string.
    fn iso_date(&self, value: &Value) -> ValidationResult<()>;

    /// Parses an ISO 8601 duration.
    fn duration(&self, text: &str) -> Result<Duration, DurationError>;

    /// A real boolean.
    fn boolean(&self, value: &Value) -> ValidationResult<()>;

    /// A key/value object.
    fn object(&self, value: &Value) -> ValidationResult<()>;

    /// An array.
    fn array(&self, value: &Value) -> ValidationResult<()>;

    /// A store identifier in its native format.
    fn object_id(&self, value: &Value) -> ValidationResult<()>;

    /// An email address.
    fn email(&self, value: &Value) -> ValidationResult<()>;

    /// A UUID of an accepted version.
    fn uuid(&self, value: &Value) -> ValidationResult<()>;
}

// ============================================================================
// CONFIG
// ============================================================================

/// Tuning knobs for [`StandardSchema`].
///
/// Deserializes with every field optional:
///
/// ```rust
/// use chainval_validator::{LengthMode, SchemaConfig};
///
/// let config: SchemaConfig = serde_json::from_str(r#"{ "length_mode": "bytes" }"#).unwrap();
/// assert_eq!(config.length_mode, LengthMode::Bytes);
/// assert_eq!(config.uuid_versions, vec![1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// How string bounds count length.
    pub length_mode: LengthMode,
    /// Accepted UUID versions.
    pub uuid_versions: Vec<usize>,
    /// Reject simple, braced and URN UUID forms.
    pub uuid_hyphenated_only: bool,
    /// Reject integers beyond 2^53 - 1.
    pub safe_integers: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            length_mode: LengthMode::Chars,
            uuid_versions: vec![1, 4],
            uuid_hyphenated_only: false,
            safe_integers: true,
        }
    }
}

// ============================================================================
// STANDARD SCHEMA
// ============================================================================

/// The built-in [`PrimitiveSchema`].
#[derive(Debug, Clone)]
pub struct StandardSchema {
    config: SchemaConfig,
    uuid: Uuid,
    email: Email,
}

impl StandardSchema {
    /// Creates a schema with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SchemaConfig::default())
    }

    /// Creates a schema from an explicit configuration.
    #[must_use]
    pub fn with_config(config: SchemaConfig) -> Self {
        let uuid = Uuid::new()
            .versions(&config.uuid_versions)
            .hyphenated_only(config.uuid_hyphenated_only);
        Self {
            config,
            uuid,
            email: email(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }
}

impl Default for StandardSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimitiveSchema for StandardSchema {
    fn string(
        &self,
        value: &Value,
        min: Option<usize>,
        max: Option<usize>,
    ) -> ValidationResult<()> {
        StringLength::new(min, max)
            .with_mode(self.config.length_mode)
            .validate_any(value)
    }

    fn integer(&self, value: &Value) -> ValidationResult<()> {
        if self.config.safe_integers {
            crate::compose![finite(), whole_number(), safe_integer()].validate_any(value)
        } else {
            crate::compose![finite(), whole_number()].validate_any(value)
        }
    }

    fn number(&self, value: &Value) -> ValidationResult<()> {
        finite().validate_any(value)
    }

    fn iso_date(&self, value: &Value) -> ValidationResult<()> {
        iso_date().validate_any(value)
    }

    fn duration(&self, text: &str) -> Result<Duration, DurationError> {
        parse_duration(text)
    }

    fn boolean(&self, value: &Value) -> ValidationResult<()> {
        strict_boolean().validate(value)
    }

    fn object(&self, value: &Value) -> ValidationResult<()> {
        is_object().validate(value)
    }

    fn array(&self, value: &Value) -> ValidationResult<()> {
        is_array().validate(value)
    }

    fn object_id(&self, value: &Value) -> ValidationResult<()> {
        object_id().validate_any(value)
    }

    fn email(&self, value: &Value) -> ValidationResult<()> {
        self.email.validate_any(value)
    }

    fn uuid(&self, value: &Value) -> ValidationResult<()> {
        self.uuid.validate_any(value)
    }
}
