//! Boolean validators

use crate::Value;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is a real boolean.
    ///
    /// No coercion happens: `"true"`, `1` and `0` are rejected.
    pub StrictBoolean for Value;
    rule(input) { matches!(input, Value::Bool(_)) }
    error(input) { ValidationError::type_mismatch("", "boolean", input.type_name()) }
    fn strict_boolean();
}
