//! Collection size validators

use crate::foundation::ValidationError;
use crate::{ObjectMap, Value};

crate::validator! {
    /// Validates that an array has at least one element.
    pub NotEmptyArray for [Value];
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("empty_array", "Array must not be empty") }
    fn not_empty_array();
}

crate::validator! {
    /// Validates that an object has at least one own key.
    pub NotEmptyObject for ObjectMap;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("empty_object", "Object must not be empty") }
    fn not_empty_object();
}
