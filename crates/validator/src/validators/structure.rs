//! Structural shape validators
//!
//! Shape checks only look at the variant of a [`Value`]; an array is never
//! an object and null is neither.

use crate::Value;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is a key/value object.
    pub IsObject for Value;
    rule(input) { matches!(input, Value::Object(_)) }
    error(input) { ValidationError::type_mismatch("", "object", input.type_name()) }
    fn is_object();
}

crate::validator! {
    /// Validates that a value is an array.
    pub IsArray for Value;
    rule(input) { matches!(input, Value::Array(_)) }
    error(input) { ValidationError::type_mismatch("", "array", input.type_name()) }
    fn is_array();
}
