//! String content validators
//!
//! Regex-backed syntax checks. Static patterns compile once per process.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$"
    ).unwrap()
});

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("", "regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
}

impl MatchesRegex {
    /// Builds a pattern that fully matches exactly one of `alternatives`.
    ///
    /// The alternatives are joined verbatim into `^(a|b|...)$`, so each one
    /// is itself a regex fragment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainval_validator::foundation::Validate;
    /// use chainval_validator::validators::MatchesRegex;
    ///
    /// let v = MatchesRegex::one_of(&["read", "write"]).unwrap();
    /// assert!(v.validate("read").is_ok());
    /// assert!(v.validate("readwrite").is_err());
    /// ```
    pub fn one_of<S: AsRef<str>>(alternatives: &[S]) -> Result<Self, regex::Error> {
        let joined = alternatives
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            pattern: regex::Regex::new(&format!("^({joined})$"))?,
        })
    }

    /// Compiles an arbitrary pattern.
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }

    /// Returns `true` if the pattern matches. Shorthand for hot loops.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email syntax.
    ///
    /// The domain needs at least two labels and an alphabetic top-level label,
    /// so `x@x` is rejected.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("", "email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
