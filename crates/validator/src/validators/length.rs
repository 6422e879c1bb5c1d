//! String length validators
//!
//! Length is measured in Unicode scalar values (chars) by default.
//! [`LengthMode::Bytes`] counts raw bytes instead.

use crate::foundation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length("", self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

// ============================================================================
// STRING LENGTH (optional bounds)
// ============================================================================

/// Validates a string against optional lower and upper length bounds.
///
/// Empty strings are rejected unless no bound is set or the lower bound is
/// exactly zero. Every other empty-string case fails with `not_empty`
/// before the bounds are looked at.
///
/// # Examples
///
/// ```rust
/// use chainval_validator::foundation::Validate;
/// use chainval_validator::validators::StringLength;
///
/// assert!(StringLength::new(None, None).validate("").is_ok());
/// assert!(StringLength::new(Some(0), Some(5)).validate("").is_ok());
/// assert!(StringLength::new(None, Some(5)).validate("").is_err());
/// assert!(StringLength::new(Some(0), Some(5)).validate("toolong!!").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringLength {
    /// Minimum length (inclusive).
    pub min: Option<usize>,
    /// Maximum length (inclusive).
    pub max: Option<usize>,
    /// Whether `""` passes regardless of `min`.
    pub allow_empty: bool,
    /// How to count length.
    pub mode: LengthMode,
}

impl StringLength {
    /// Creates a bounded string validator counting Unicode chars.
    #[must_use]
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        let allow_empty = (min.is_none() && max.is_none()) || min == Some(0);
        Self {
            min,
            max,
            allow_empty,
            mode: LengthMode::Chars,
        }
    }

    /// Switches the counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Validate for StringLength {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            return if self.allow_empty {
                Ok(())
            } else {
                NotEmpty.validate(input)
            };
        }

        if let Some(min) = self.min {
            MinLength { min, mode: self.mode }.validate(input)?;
        }
        if let Some(max) = self.max {
            MaxLength { max, mode: self.mode }.validate(input)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
