//! Fluent per-field validation chain
//!
//! A [`ValidationChain`] binds one candidate [`Value`], a caller-owned error
//! list and an [`ErrorMessages`] bundle. Each check consults the missing
//! value policy, asks the [`PrimitiveSchema`] about the value, and on
//! failure appends `prefix + message` to the list and clears `valid`.
//!
//! # Missing values
//!
//! A value is missing when it is [`Value::Null`]. For every check:
//!
//! 1. missing and optional: the check does nothing
//! 2. missing and required: one `required` message, `valid` becomes `false`
//! 3. present: the check's own rule runs
//!
//! # Examples
//!
//! ```rust
//! use chainval_validator::{ErrorMessages, Value, validate};
//!
//! let messages = ErrorMessages::new("email is required", "email is invalid");
//! let mut errors = Vec::new();
//!
//! let ok = validate("x@x", &messages, &mut errors).is_email().valid();
//! assert!(!ok);
//! assert_eq!(errors, vec!["email is invalid".to_string()]);
//!
//! errors.clear();
//! let ok = validate(Value::Null, &messages, &mut errors)
//!     .is_optional()
//!     .is_string(None, None)
//!     .valid();
//! assert!(ok);
//! assert!(errors.is_empty());
//! ```

mod error;
mod messages;

pub use error::ContractViolation;
pub use messages::ErrorMessages;

use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::schema::{PrimitiveSchema, StandardSchema};
use crate::validators::{MatchesRegex, not_empty_array, not_empty_object, not_nan};
use crate::value::Value;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Opens a chain over `value` with no message prefix.
pub fn validate<'a>(
    value: impl Into<Value>,
    messages: &'a ErrorMessages,
    errors: &'a mut Vec<String>,
) -> ValidationChain<'a> {
    ValidationChain::new(value, messages, errors)
}

/// Opens a chain whose messages are prefixed, typically with a field path.
///
/// ```rust
/// use chainval_validator::{ErrorMessages, validate_prefixed};
///
/// let messages = ErrorMessages::new("is required", "is invalid");
/// let mut errors = Vec::new();
/// validate_prefixed(true, &messages, &mut errors, "user.age ").is_number();
/// assert_eq!(errors, vec!["user.age is invalid".to_string()]);
/// ```
pub fn validate_prefixed<'a>(
    value: impl Into<Value>,
    messages: &'a ErrorMessages,
    errors: &'a mut Vec<String>,
    prefix: impl Into<String>,
) -> ValidationChain<'a> {
    ValidationChain::new(value, messages, errors).with_prefix(prefix)
}

// ============================================================================
// CHAIN
// ============================================================================

/// Validation state for a single field.
///
/// `valid` starts `true` and only ever moves to `false`. The error list is
/// only appended to.
#[derive(Debug)]
pub struct ValidationChain<'a, S = StandardSchema> {
    value: Value,
    optional: bool,
    valid: bool,
    errors: &'a mut Vec<String>,
    messages: &'a ErrorMessages,
    prefix: String,
    schema: S,
}

impl<'a> ValidationChain<'a, StandardSchema> {
    /// Creates a chain backed by the default [`StandardSchema`].
    pub fn new(
        value: impl Into<Value>,
        messages: &'a ErrorMessages,
        errors: &'a mut Vec<String>,
    ) -> Self {
        Self {
            value: value.into(),
            optional: false,
            valid: true,
            errors,
            messages,
            prefix: String::new(),
            schema: StandardSchema::default(),
        }
    }
}

impl<'a, S: PrimitiveSchema> ValidationChain<'a, S> {
    /// Swaps the primitive schema, keeping the rest of the state.
    pub fn with_schema<T: PrimitiveSchema>(self, schema: T) -> ValidationChain<'a, T> {
        ValidationChain {
            value: self.value,
            optional: self.optional,
            valid: self.valid,
            errors: self.errors,
            messages: self.messages,
            prefix: self.prefix,
            schema,
        }
    }

    /// Sets the string prepended to every emitted message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Re-initializes the chain for another value.
    ///
    /// Clears `optional`, restores `valid` and binds the new list, bundle and
    /// prefix. The schema is kept.
    pub fn rebind(
        &mut self,
        value: impl Into<Value>,
        messages: &'a ErrorMessages,
        errors: &'a mut Vec<String>,
        prefix: impl Into<String>,
    ) -> &mut Self {
        self.value = value.into();
        self.optional = false;
        self.valid = true;
        self.errors = errors;
        self.messages = messages;
        self.prefix = prefix.into();
        self
    }

    /// Lets a missing value pass every later check silently.
    pub fn is_optional(&mut self) -> &mut Self {
        self.optional = true;
        self
    }

    /// Runs `action` only if every check so far has passed.
    pub fn is_valid(&mut self, action: impl FnOnce()) -> &mut Self {
        if self.valid {
            action();
        }
        self
    }

    /// The running verdict.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Consumes the chain and returns the verdict.
    #[must_use]
    pub fn into_valid(self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // ------------------------------------------------------------------------
    // Strings
    // ------------------------------------------------------------------------

    /// A string whose length lies within `min..=max`.
    ///
    /// With no bounds, or with `min == Some(0)`, the empty string passes.
    pub fn is_string(&mut self, min: Option<usize>, max: Option<usize>) -> &mut Self {
        self.check(|schema, value| schema.string(value, min, max));
        self
    }

    /// Like [`is_string`](Self::is_string), and the value must not be one of
    /// `not_allowed`.
    ///
    /// The membership test runs even when the string check failed, so one
    /// call can append two messages.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::NotAllowedNotArray`] if `not_allowed` is not an
    /// array. Nothing is recorded in that case.
    pub fn is_string_excluding(
        &mut self,
        min: Option<usize>,
        max: Option<usize>,
        not_allowed: &Value,
    ) -> Result<&mut Self, ContractViolation> {
        let Value::Array(blocked) = not_allowed else {
            let violation = ContractViolation::NotAllowedNotArray {
                actual: not_allowed.type_name(),
            };
            tracing::debug!(prefix = %self.prefix, error = %violation, "contract violation");
            return Err(violation);
        };

        self.check(|schema, value| schema.string(value, min, max));
        if !self.value.is_missing() && blocked.contains(&self.value) {
            self.reject(&ValidationError::new("not_allowed", "Value is not allowed"));
        }
        Ok(self)
    }

    /// A string equal to one of `allowed`.
    pub fn is_string_enum<T: AsRef<str>>(&mut self, allowed: &[T]) -> &mut Self {
        if self.check(|schema, value| schema.string(value, None, None))
            && let Some(text) = self.value.as_str()
            && !allowed.iter().any(|candidate| candidate.as_ref() == text)
        {
            let error = ValidationError::new("not_in_enum", "Value is not an allowed option")
                .with_param("actual", text.to_owned());
            self.reject(&error);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------------

    /// A finite integer.
    pub fn is_number(&mut self) -> &mut Self {
        if !self.admit() {
            return self;
        }
        let outcome = match &self.value {
            Value::Number(n) => not_nan()
                .validate(n)
                .and_then(|()| self.schema.integer(&self.value)),
            other => Err(ValidationError::type_mismatch("", "number", other.type_name())),
        };
        if let Err(error) = outcome {
            self.reject(&error);
        }
        self
    }

    /// A finite number, integral or not.
    pub fn is_float(&mut self) -> &mut Self {
        self.check(|schema, value| {
            if let Value::Number(n) = value {
                not_nan().validate(n)?;
            }
            schema.number(value)
        });
        self
    }

    // ------------------------------------------------------------------------
    // Temporal
    // ------------------------------------------------------------------------

    /// An ISO 8601 date or date-time string.
    pub fn is_date_iso(&mut self) -> &mut Self {
        self.check(|schema, value| schema.iso_date(value));
        self
    }

    /// An ISO 8601 duration string such as `P1DT12H`.
    pub fn is_date_iso8601_duration(&mut self) -> &mut Self {
        self.check(|schema, value| {
            let text = value
                .as_str()
                .ok_or_else(|| ValidationError::type_mismatch("", "string", value.type_name()))?;
            schema.duration(text).map(|_| ()).map_err(|e| {
                ValidationError::invalid_format("", "iso_duration").with_param("reason", e.to_string())
            })
        });
        self
    }

    // ------------------------------------------------------------------------
    // Shapes
    // ------------------------------------------------------------------------

    /// A real boolean; `"true"` and `1` fail.
    pub fn is_boolean(&mut self) -> &mut Self {
        self.check(|schema, value| schema.boolean(value));
        self
    }

    pub fn is_object(&mut self) -> &mut Self {
        self.check(|schema, value| schema.object(value));
        self
    }

    /// An object with at least one key.
    pub fn is_object_not_empty(&mut self) -> &mut Self {
        if self.admit() && self.check(|schema, value| schema.object(value)) {
            let outcome = not_empty_object().validate_any(&self.value);
            if let Err(error) = outcome {
                self.reject(&error);
            }
        }
        self
    }

    pub fn is_array(&mut self) -> &mut Self {
        self.check(|schema, value| schema.array(value));
        self
    }

    /// An array with at least one element.
    pub fn is_array_not_empty(&mut self) -> &mut Self {
        if self.check(|schema, value| schema.array(value)) {
            let outcome = not_empty_array().validate_any(&self.value);
            if let Err(error) = outcome {
                self.reject(&error);
            }
        }
        self
    }

    /// Every element fully matches one of the `allowed` patterns.
    ///
    /// A single string is checked as a one-element array. Elements are
    /// compared by their scalar text; nested arrays, objects and nulls never
    /// match. Checking stops at the first mismatch.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::InvalidPattern`] if `^(a|b|...)$` built from
    /// `allowed` is not a valid regular expression.
    pub fn is_array_match<T: AsRef<str>>(
        &mut self,
        allowed: &[T],
    ) -> Result<&mut Self, ContractViolation> {
        let pattern = MatchesRegex::one_of(allowed).map_err(|e| {
            let violation = ContractViolation::from(e);
            tracing::debug!(prefix = %self.prefix, error = %violation, "contract violation");
            violation
        })?;

        if !self.admit() {
            return Ok(self);
        }

        let outcome = match &self.value {
            Value::String(text) => pattern.validate(text),
            Value::Array(items) => items.iter().try_for_each(|item| match item.scalar_text() {
                Some(text) => pattern.validate(&text),
                None => Err(ValidationError::type_mismatch("", "scalar", item.type_name())),
            }),
            other => Err(ValidationError::type_mismatch("", "array", other.type_name())),
        };
        if let Err(error) = outcome {
            self.reject(&error);
        }
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Identifiers
    // ------------------------------------------------------------------------

    /// A document-store object id.
    pub fn is_object_id(&mut self) -> &mut Self {
        if !self.admit() {
            return self;
        }
        if let Err(error) = self.schema.object_id(&self.value) {
            self.reject(&error);
        }
        self
    }

    pub fn is_email(&mut self) -> &mut Self {
        self.check(|schema, value| schema.email(value));
        self
    }

    /// A UUID of an accepted version (v1 or v4 by default).
    pub fn is_uuid(&mut self) -> &mut Self {
        self.check(|schema, value| schema.uuid(value));
        self
    }

    // ------------------------------------------------------------------------
    // Custom
    // ------------------------------------------------------------------------

    /// Fails when `predicate` returns `false`.
    ///
    /// ```rust
    /// use chainval_validator::{ErrorMessages, validate};
    ///
    /// let messages = ErrorMessages::new("required", "must be even");
    /// let mut errors = Vec::new();
    /// let even = validate(3, &messages, &mut errors)
    ///     .custom(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0))
    ///     .valid();
    /// assert!(!even);
    /// ```
    pub fn custom(&mut self, predicate: impl FnOnce(&Value) -> bool) -> &mut Self {
        if self.admit() && !predicate(&self.value) {
            self.reject(&ValidationError::custom("predicate rejected the value"));
        }
        self
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Applies the missing value policy. Returns `true` when the value is
    /// present and the caller should run its rule.
    fn admit(&mut self) -> bool {
        if !self.value.is_missing() {
            return true;
        }
        if !self.optional {
            tracing::trace!(prefix = %self.prefix, "required value is missing");
            let message = format!("{}{}", self.prefix, self.messages.required);
            self.fail(message);
        }
        false
    }

    /// Runs a schema check behind the missing value policy. Returns `true`
    /// only when the value was present and passed.
    fn check(&mut self, rule: impl FnOnce(&S, &Value) -> ValidationResult<()>) -> bool {
        if !self.admit() {
            return false;
        }
        match rule(&self.schema, &self.value) {
            Ok(()) => true,
            Err(error) => {
                self.reject(&error);
                false
            }
        }
    }

    fn reject(&mut self, error: &ValidationError) {
        tracing::trace!(
            prefix = %self.prefix,
            code = %error.code,
            value_type = self.value.type_name(),
            "check failed"
        );
        let message = format!("{}{}", self.prefix, self.messages.invalid);
        self.fail(message);
    }

    fn fail(&mut self, message: String) {
        self.valid = false;
        self.errors.push(message);
    }
}
