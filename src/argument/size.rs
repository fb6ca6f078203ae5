//! Emptiness and size checks over containers.
//!
//! Generic over the [`HasLength`] capability (collections and maps). Text
//! subjects go through [`crate::argument::text`] instead, where the
//! failure payload also carries the subject.

use crate::foundation::{HasLength, ValidationFailure, ValidationMessage};

/// Fails with `RequiredMissing` if the container is absent, or with
/// `InvalidArgument` if it holds any element.
pub fn require_empty<C, M>(value: Option<&C>, message: &M) -> Result<(), ValidationFailure>
where
    C: HasLength + ?Sized,
    M: ValidationMessage + ?Sized,
{
    match value {
        None => Err(ValidationFailure::required_missing(message)),
        Some(container) if !container.is_empty() => {
            Err(ValidationFailure::invalid_argument(message))
        }
        Some(_) => Ok(()),
    }
}

/// Fails with `RequiredMissing` if the container is absent, or with
/// `InvalidArgument` if it is empty.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::require_not_empty;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Items are required");
///
/// let items = vec![1, 2];
/// assert!(require_not_empty(Some(&items), &MSG).is_ok());
/// assert!(require_not_empty(Some(&Vec::<i32>::new()), &MSG).is_err());
/// assert!(require_not_empty(None::<&Vec<i32>>, &MSG).is_err());
/// ```
pub fn require_not_empty<C, M>(value: Option<&C>, message: &M) -> Result<(), ValidationFailure>
where
    C: HasLength + ?Sized,
    M: ValidationMessage + ?Sized,
{
    match value {
        None => Err(ValidationFailure::required_missing(message)),
        Some(container) if container.is_empty() => {
            Err(ValidationFailure::invalid_argument(message))
        }
        Some(_) => Ok(()),
    }
}

/// Fails with `InvalidArgument` if the cardinality differs from `size`.
///
/// Failure params: `[size]`, the expected bound only, not the subject.
pub fn has_size<C, M>(value: &C, size: usize, message: &M) -> Result<(), ValidationFailure>
where
    C: HasLength + ?Sized,
    M: ValidationMessage + ?Sized,
{
    if value.length() == size {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(size))
    }
}

/// Fails with `InvalidArgument` if the cardinality is outside `min..=max`
/// (inclusive both ends).
///
/// Failure params: `[min, max]`.
pub fn has_size_between<C, M>(
    value: &C,
    min: usize,
    max: usize,
    message: &M,
) -> Result<(), ValidationFailure>
where
    C: HasLength + ?Sized,
    M: ValidationMessage + ?Sized,
{
    let size = value.length();
    if size < min || size > max {
        return Err(ValidationFailure::invalid_argument(message)
            .with_param(min)
            .with_param(max));
    }
    Ok(())
}
