//! Membership checks.

use std::fmt::Debug;

use crate::foundation::{ValidationFailure, ValidationMessage};

/// Fails with `InvalidArgument` if the collection does not contain the
/// value (membership by structural equality).
///
/// Failure params: `[value]`, rendered with `Debug`.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::contains;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Unknown status");
///
/// let allowed = ["open", "closed"];
/// assert!(contains(&"open", &allowed, &MSG).is_ok());
/// assert!(contains(&"stale", &allowed, &MSG).is_err());
/// ```
pub fn contains<T, M>(value: &T, collection: &[T], message: &M) -> Result<(), ValidationFailure>
where
    T: PartialEq + Debug,
    M: ValidationMessage + ?Sized,
{
    if collection.contains(value) {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_debug_param(value))
    }
}

/// Fails with `InvalidArgument` if the collection contains the value.
///
/// Failure params: `[value]`, rendered with `Debug`.
pub fn does_not_contain<T, M>(
    value: &T,
    collection: &[T],
    message: &M,
) -> Result<(), ValidationFailure>
where
    T: PartialEq + Debug,
    M: ValidationMessage + ?Sized,
{
    if collection.contains(value) {
        Err(ValidationFailure::invalid_argument(message).with_debug_param(value))
    } else {
        Ok(())
    }
}
