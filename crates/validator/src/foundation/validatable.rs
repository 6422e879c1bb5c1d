//! AsValidatable trait with GAT for universal type conversion
//!
//! Lets one validator accept several input types. The [`Value`]
//! implementations narrow a dynamic candidate to the validator's input and
//! fail with a `type_mismatch` error when the variant does not fit.

use crate::foundation::ValidationError;
use crate::value::{ObjectMap, Value};
use std::borrow::Borrow;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses a GAT to return either a borrowed reference or an owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// REFLEXIVE IMPLEMENTATIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<f64> for f64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<Value> for Value {
    type Output<'a> = &'a Value;

    #[inline]
    fn as_validatable(&self) -> Result<&Value, ValidationError> {
        Ok(self)
    }
}

// ============================================================================
// DYNAMIC VALUE NARROWING
// ============================================================================

fn mismatch(expected: &'static str, actual: &Value) -> ValidationError {
    ValidationError::new(
        "type_mismatch",
        format!("Expected {expected}, got {}", actual.type_name()),
    )
    .with_param("expected", expected)
    .with_param("actual", actual.type_name())
}

impl AsValidatable<str> for Value {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        self.as_str().ok_or_else(|| mismatch("string", self))
    }
}

impl AsValidatable<f64> for Value {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        self.as_f64().ok_or_else(|| mismatch("number", self))
    }
}

impl AsValidatable<bool> for Value {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }
}

impl AsValidatable<[Value]> for Value {
    type Output<'a> = &'a [Value];

    #[inline]
    fn as_validatable(&self) -> Result<&[Value], ValidationError> {
        self.as_array().ok_or_else(|| mismatch("array", self))
    }
}

impl AsValidatable<ObjectMap> for Value {
    type Output<'a> = &'a ObjectMap;

    #[inline]
    fn as_validatable(&self) -> Result<&ObjectMap, ValidationError> {
        self.as_object().ok_or_else(|| mismatch("object", self))
    }
}
