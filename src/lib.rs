//! # guardrail
//!
//! Fail-fast guard clauses and precondition checks with categorized,
//! parameterized failures.
//!
//! Every check is a pure function: it either returns `Ok(())` or returns a
//! [`ValidationFailure`](foundation::ValidationFailure) describing exactly
//! what was violated: a failure kind, the `(code, message)` pair of the
//! rule being enforced, and the literal argument values of the failing
//! call. Checks never log, never retry, and never recover; the caller
//! propagates the failure with `?`.
//!
//! ## Quick start
//!
//! ```rust
//! use guardrail::prelude::*;
//! use guardrail::{argument, condition};
//!
//! const NAME_REQUIRED: StaticMessage =
//!     StaticMessage::new("USR-0001", "Name is required");
//! const QUANTITY_POSITIVE: StaticMessage =
//!     StaticMessage::new("USR-0002", "Quantity must be positive");
//!
//! fn create_user(name: Option<&str>, quantity: i64) -> Result<(), ValidationFailure> {
//!     argument::require_not_blank(name, &NAME_REQUIRED)?;
//!     argument::is_greater_than_zero(&quantity, &QUANTITY_POSITIVE)?;
//!     Ok(())
//! }
//!
//! let failure = create_user(None, 3).unwrap_err();
//! assert_eq!(failure.kind(), FailureKind::RequiredMissing);
//! assert_eq!(failure.code(), "USR-0001");
//! ```
//!
//! ## Two call surfaces, one taxonomy
//!
//! - [`argument`] checks guard the *inputs* of an operation and fail with
//!   [`RequiredMissing`](foundation::FailureKind::RequiredMissing) or
//!   [`InvalidArgument`](foundation::FailureKind::InvalidArgument).
//! - [`condition`] checks assert that the *current state* permits the
//!   operation and fail with
//!   [`NotAllowed`](foundation::FailureKind::NotAllowed).
//!
//! The remaining kinds (`NotFound`, `Duplicate`, `DependencyMissing`) are
//! reserved for callers; construct them with the
//! [`ValidationFailure`](foundation::ValidationFailure) helpers.

pub mod argument;
pub mod condition;
pub mod foundation;
pub mod prelude;

pub use foundation::{
    FailureKind, HasLength, HasZero, StaticMessage, ValidationFailure, ValidationMessage,
};
