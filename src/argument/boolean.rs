//! Boolean gates over argument-derived conditions.
//!
//! The same gates exist in [`crate::condition`] with a different failure
//! kind: these report a bad *argument* (`InvalidArgument`), those report a
//! disallowed *state* (`NotAllowed`). Pick the surface that matches what
//! the condition is about.

use crate::foundation::{ValidationFailure, ValidationMessage};

/// Fails with `InvalidArgument` if the condition is false.
pub fn is_true<M>(condition: bool, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    if condition {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message))
    }
}

/// Fails with `InvalidArgument` if the condition is true.
pub fn is_false<M>(condition: bool, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    if condition {
        Err(ValidationFailure::invalid_argument(message))
    } else {
        Ok(())
    }
}
