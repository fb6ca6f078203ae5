//! Presence checks over optional values.

use crate::foundation::{ValidationFailure, ValidationMessage};

/// Fails with `InvalidArgument` if the value is present.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::require_null;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Must be absent");
///
/// assert!(require_null(None::<&i32>, &MSG).is_ok());
/// assert!(require_null(Some(&1), &MSG).is_err());
/// ```
pub fn require_null<T, M>(value: Option<&T>, message: &M) -> Result<(), ValidationFailure>
where
    T: ?Sized,
    M: ValidationMessage + ?Sized,
{
    if value.is_some() {
        return Err(ValidationFailure::invalid_argument(message));
    }
    Ok(())
}

/// Fails with `RequiredMissing` if the value is absent.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::require_not_null;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Value is required");
///
/// assert!(require_not_null(Some(&1), &MSG).is_ok());
/// assert!(require_not_null(None::<&i32>, &MSG).is_err());
/// ```
pub fn require_not_null<T, M>(value: Option<&T>, message: &M) -> Result<(), ValidationFailure>
where
    T: ?Sized,
    M: ValidationMessage + ?Sized,
{
    if value.is_none() {
        return Err(ValidationFailure::required_missing(message));
    }
    Ok(())
}

/// Fails with `InvalidArgument` iff every element is absent.
///
/// An empty slice counts as "all absent" and fails. Succeeds on the first
/// present element.
pub fn any_not_null<T, M>(values: &[Option<T>], message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    if values.iter().any(Option::is_some) {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message))
    }
}

/// Fails with `InvalidArgument` unless exactly one element is present.
///
/// Short-circuits as soon as a second present element is seen; the
/// zero-count case (including the empty slice) requires the full scan.
pub fn exactly_one_not_null<T, M>(values: &[Option<T>], message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    let mut present = 0usize;
    for value in values {
        if value.is_some() {
            present += 1;
            if present > 1 {
                return Err(ValidationFailure::invalid_argument(message));
            }
        }
    }

    if present == 0 {
        return Err(ValidationFailure::invalid_argument(message));
    }
    Ok(())
}
