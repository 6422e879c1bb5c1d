//! Core traits for primitive validators

use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every primitive validator implements.
///
/// Generic over the input type; all validators return
/// `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```rust
/// use chainval_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length("", self.min, input.len()))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 2 }.validate("ab").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// This is how primitive validators run against a dynamic
    /// [`Value`](crate::Value): the conversion fails with `type_mismatch`
    /// when the variant does not fit.
    ///
    /// ```rust
    /// use chainval_validator::Value;
    /// use chainval_validator::foundation::Validate;
    /// use chainval_validator::validators::email;
    ///
    /// assert!(email().validate_any(&Value::from("user@example.com")).is_ok());
    /// assert!(email().validate_any(&Value::from(42)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
