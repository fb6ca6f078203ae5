//! Condition checks.
//!
//! Guard clauses for the *current state* of the system rather than the
//! inputs of a call: "this account may not place orders", "the window is
//! closed". Behaviorally identical to the boolean gates in
//! [`crate::argument`], but failures carry
//! [`FailureKind::NotAllowed`](crate::foundation::FailureKind::NotAllowed)
//! instead of `InvalidArgument`; downstream layers map the distinction to
//! different user-facing responses.

use crate::foundation::{ValidationFailure, ValidationMessage};

/// Fails with `NotAllowed` if the condition is false.
///
/// # Examples
///
/// ```rust
/// use guardrail::condition;
/// use guardrail::foundation::{FailureKind, StaticMessage};
///
/// const ACCOUNT_ACTIVE: StaticMessage =
///     StaticMessage::new("ACC-0003", "Account must be active");
///
/// let failure = condition::is_true(false, &ACCOUNT_ACTIVE).unwrap_err();
/// assert_eq!(failure.kind(), FailureKind::NotAllowed);
/// ```
pub fn is_true<M>(condition: bool, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    if condition {
        Ok(())
    } else {
        Err(ValidationFailure::not_allowed(message))
    }
}

/// Fails with `NotAllowed` if the condition is true.
pub fn is_false<M>(condition: bool, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    if condition {
        Err(ValidationFailure::not_allowed(message))
    } else {
        Ok(())
    }
}
