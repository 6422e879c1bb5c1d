//! Error types for primitive validation failures
//!
//! Primitive validators report a structured [`ValidationError`]. The chain
//! never surfaces these to the caller directly; it folds them into the
//! caller's message bundle and traces the error code.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured primitive validation error.
///
/// # Examples
///
/// ```rust
/// use chainval_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_param("min", "5")
///     .with_param("actual", "3");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "invalid_format", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional field path.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        self.field = if field.is_empty() { None } else { Some(field) };
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min_length" error.
    pub fn min_length(field: impl Into<Cow<'static, str>>, min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_field(field)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(field: impl Into<Cow<'static, str>>, max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_field(field)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_format", "Invalid format")
            .with_field(field)
            .with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "Type mismatch")
            .with_field(field)
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_empty_field_is_dropped() {
        let error = ValidationError::invalid_format("", "email");
        assert_eq!(error.field, None);
        assert_eq!(error.param("expected"), Some("email"));
    }

    #[test]
    fn test_display_with_params() {
        let error = ValidationError::min_length("name", 3, 1);
        assert_eq!(
            error.to_string(),
            "[name] min_length: Must be at least 3 characters (params: [min=3, actual=1])"
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
