//! Equality, ordering, and range checks.
//!
//! One generic implementation per relation replaces per-type overloads:
//! ordering checks are bounded by `PartialOrd + Display`, the `…_zero`
//! variants by the [`HasZero`] capability. Strict relations fail on
//! equality; inclusive relations do not. Comparisons where no ordering
//! relation holds (NaN) always fail.
//!
//! Heterogeneous numeric comparands are supported by explicit widening at
//! the call site, e.g. `is_greater_than_or_equal_to(&f64::from(1), &1.0, msg)`.

use std::fmt::{Debug, Display};

use crate::foundation::{HasZero, ValidationFailure, ValidationMessage};

// ============================================================================
// EQUALITY
// ============================================================================

/// Fails with `InvalidArgument` if the values are not structurally equal.
///
/// Failure params: `[value, other]`, rendered with `Debug`.
pub fn is_equal_to<T, M>(value: &T, other: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: PartialEq + Debug + ?Sized,
    M: ValidationMessage + ?Sized,
{
    if value == other {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_debug_param(&value)
            .with_debug_param(&other))
    }
}

/// Fails with `InvalidArgument` if the values are structurally equal.
///
/// Failure params: `[value, other]`, rendered with `Debug`.
pub fn is_not_equal_to<T, M>(value: &T, other: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: PartialEq + Debug + ?Sized,
    M: ValidationMessage + ?Sized,
{
    if value == other {
        Err(ValidationFailure::invalid_argument(message)
            .with_debug_param(&value)
            .with_debug_param(&other))
    } else {
        Ok(())
    }
}

/// Fails with `InvalidArgument` if the value equals its type's zero.
///
/// The comparison is exact-value: for scale-carrying decimal types, `0.0`
/// and `0.00` are both zero. Failure params: `[value]`.
pub fn is_not_equal_to_zero<T, M>(value: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: HasZero + Display,
    M: ValidationMessage + ?Sized,
{
    if *value == T::zero() {
        return Err(ValidationFailure::invalid_argument(message).with_param(value));
    }
    Ok(())
}

// ============================================================================
// ORDERING
// ============================================================================

/// Fails with `InvalidArgument` unless `value < other`.
///
/// Strict: equality fails. Failure params: `[value, other]`.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::is_less_than;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Too large");
///
/// assert!(is_less_than(&1, &2, &MSG).is_ok());
/// assert!(is_less_than(&2, &2, &MSG).is_err()); // strict
/// ```
pub fn is_less_than<T, M>(value: &T, other: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: PartialOrd + Display,
    M: ValidationMessage + ?Sized,
{
    if value < other {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(other))
    }
}

/// Fails with `InvalidArgument` unless `value <= other`.
///
/// Inclusive: equality passes. Failure params: `[value, other]`.
pub fn is_less_than_or_equal_to<T, M>(
    value: &T,
    other: &T,
    message: &M,
) -> Result<(), ValidationFailure>
where
    T: PartialOrd + Display,
    M: ValidationMessage + ?Sized,
{
    if value <= other {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(other))
    }
}

/// Fails with `InvalidArgument` unless `value > other`.
///
/// Strict: equality fails. Failure params: `[value, other]`.
pub fn is_greater_than<T, M>(value: &T, other: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: PartialOrd + Display,
    M: ValidationMessage + ?Sized,
{
    if value > other {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(other))
    }
}

/// Fails with `InvalidArgument` unless `value >= other`.
///
/// Inclusive: equality passes. Failure params: `[value, other]`.
pub fn is_greater_than_or_equal_to<T, M>(
    value: &T,
    other: &T,
    message: &M,
) -> Result<(), ValidationFailure>
where
    T: PartialOrd + Display,
    M: ValidationMessage + ?Sized,
{
    if value >= other {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(other))
    }
}

/// Fails with `InvalidArgument` unless `value < 0`. Failure params: `[value]`.
pub fn is_less_than_zero<T, M>(value: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: HasZero + Display,
    M: ValidationMessage + ?Sized,
{
    if *value < T::zero() {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(value))
    }
}

/// Fails with `InvalidArgument` unless `value <= 0`. Failure params: `[value]`.
pub fn is_less_than_or_equal_to_zero<T, M>(value: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: HasZero + Display,
    M: ValidationMessage + ?Sized,
{
    if *value <= T::zero() {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(value))
    }
}

/// Fails with `InvalidArgument` unless `value > 0`. Failure params: `[value]`.
pub fn is_greater_than_zero<T, M>(value: &T, message: &M) -> Result<(), ValidationFailure>
where
    T: HasZero + Display,
    M: ValidationMessage + ?Sized,
{
    if *value > T::zero() {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(value))
    }
}

/// Fails with `InvalidArgument` unless `value >= 0`. Failure params: `[value]`.
pub fn is_greater_than_or_equal_to_zero<T, M>(
    value: &T,
    message: &M,
) -> Result<(), ValidationFailure>
where
    T: HasZero + Display,
    M: ValidationMessage + ?Sized,
{
    if *value >= T::zero() {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(value))
    }
}

// ============================================================================
// RANGE
// ============================================================================

/// Fails with `InvalidArgument` unless `low <= value <= high` (inclusive
/// both ends).
///
/// The bounds themselves are not validated: an inverted range (`low >
/// high`) simply fails every value. Failure params: `[value, low, high]`.
pub fn is_between<T, M>(
    value: &T,
    low: &T,
    high: &T,
    message: &M,
) -> Result<(), ValidationFailure>
where
    T: PartialOrd + Display,
    M: ValidationMessage + ?Sized,
{
    if value >= low && value <= high {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(low)
            .with_param(high))
    }
}
