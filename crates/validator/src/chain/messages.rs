//! Caller-supplied message bundle

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The two messages a chain can emit for one field.
///
/// Messages are appended verbatim (after the chain's prefix), so they are
/// usually already localized by the caller. Bundles deserialize from
/// configuration:
///
/// ```rust
/// use chainval_validator::ErrorMessages;
///
/// let messages: ErrorMessages =
///     serde_json::from_str(r#"{ "required": "email is required", "invalid": "email is invalid" }"#)
///         .unwrap();
/// assert_eq!(messages.invalid, "email is invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorMessages {
    /// Emitted when a required value is missing.
    pub required: Cow<'static, str>,
    /// Emitted when a present value fails a check.
    pub invalid: Cow<'static, str>,
}

impl ErrorMessages {
    pub fn new(
        required: impl Into<Cow<'static, str>>,
        invalid: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            required: required.into(),
            invalid: invalid.into(),
        }
    }
}
