//! Runtime type checks over trait objects.

use std::any::{Any, type_name};

use crate::foundation::{ValidationFailure, ValidationMessage};

/// Fails with `InvalidArgument` if the value's runtime type is not `T`.
///
/// A downcast check over `dyn Any`; the subject has no general textual
/// rendering, so the failure carries the expected type name only.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
///
/// use guardrail::argument::is_instance_of;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Wrong payload type");
///
/// let payload: Box<dyn Any> = Box::new(42_i64);
/// assert!(is_instance_of::<i64, _>(payload.as_ref(), &MSG).is_ok());
/// assert!(is_instance_of::<String, _>(payload.as_ref(), &MSG).is_err());
/// ```
pub fn is_instance_of<T, M>(value: &dyn Any, message: &M) -> Result<(), ValidationFailure>
where
    T: Any,
    M: ValidationMessage + ?Sized,
{
    if value.is::<T>() {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(type_name::<T>()))
    }
}
