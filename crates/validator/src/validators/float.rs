//! Floating-point validators
//!
//! Every number a chain sees is an `f64`; these validators tell real numbers
//! from NaN, infinities and non-integral values.

use crate::foundation::ValidationError;

/// Largest integer an `f64` represents without losing precision (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

crate::validator! {
    /// Validates that a number is not NaN.
    pub NotNaN for f64;
    rule(input) { !input.is_nan() }
    error(input) { ValidationError::new("nan", "Value must be a number, got NaN") }
    fn not_nan();
}

crate::validator! {
    /// Validates that a number is finite (neither NaN nor infinite).
    pub Finite for f64;
    rule(input) { input.is_finite() }
    error(input) {
        ValidationError::new("not_finite", "Value must be a finite number")
            .with_param("actual", input.to_string())
    }
    fn finite();
}

crate::validator! {
    /// Validates that a finite number has no fractional part.
    pub WholeNumber for f64;
    rule(input) { input.fract() == 0.0 }
    error(input) {
        ValidationError::new("not_integer", "Value must be an integer")
            .with_param("actual", input.to_string())
    }
    fn whole_number();
}

crate::validator! {
    /// Validates that an integer lies within the exactly representable range.
    pub SafeInteger for f64;
    rule(input) { input.abs() <= MAX_SAFE_INTEGER }
    error(input) {
        ValidationError::new("unsafe_integer", "Integer is outside the safe range")
            .with_param("max", "9007199254740991")
            .with_param("actual", input.to_string())
    }
    fn safe_integer();
}
