//! AND combinator - logical conjunction of validators
//!
//! Primitive schema checks are built by AND-ing small validators, e.g. an
//! integer check is `Finite.and(WholeNumber).and(SafeInteger)`.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned.
///
/// # Examples
///
/// ```rust
/// use chainval_validator::combinators::And;
/// use chainval_validator::foundation::Validate;
/// use chainval_validator::validators::{max_length, min_length};
///
/// let validator = And::new(min_length(2), max_length(5));
/// assert!(validator.validate("abc").is_ok());
/// assert!(validator.validate("a").is_err());
/// assert!(validator.validate("abcdef").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct AtLeast(f64);

    impl Validate for AtLeast {
        type Input = f64;
        fn validate(&self, input: &f64) -> Result<(), ValidationError> {
            if *input >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::new("at_least", "too small"))
            }
        }
    }

    struct AtMost(f64);

    impl Validate for AtMost {
        type Input = f64;
        fn validate(&self, input: &f64) -> Result<(), ValidationError> {
            if *input <= self.0 {
                Ok(())
            } else {
                Err(ValidationError::new("at_most", "too large"))
            }
        }
    }

    #[test]
    fn test_and_both_pass() {
        assert!(and(AtLeast(1.0), AtMost(3.0)).validate(&2.0).is_ok());
    }

    #[test]
    fn test_and_reports_first_failure() {
        let validator = AtLeast(5.0).and(AtMost(1.0));
        let err = validator.validate(&3.0).unwrap_err();
        assert_eq!(err.code, "at_least");
    }

    #[test]
    fn test_and_right_failure() {
        let validator = AtLeast(1.0).and(AtMost(2.0));
        let err = validator.validate(&3.0).unwrap_err();
        assert_eq!(err.code, "at_most");
    }
}
