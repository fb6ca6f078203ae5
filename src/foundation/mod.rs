//! Foundation layer: the message contract, the failure taxonomy, and the
//! capability traits the generic checks are bounded by.
//!
//! # Architecture
//!
//! Checks are parameterized with a [`ValidationMessage`]: the stable
//! `(code, message)` pair identifying the rule being enforced. On
//! violation they construct a [`ValidationFailure`] carrying a
//! [`FailureKind`], that pair, and the literal argument values involved.
//!
//! Two small capability traits keep the check surface generic instead of
//! duplicated per concrete type:
//!
//! - [`HasLength`]: container cardinality (collections and maps);
//! - [`HasZero`]: ordered numerics with a zero value.

pub mod failure;
pub mod length;
pub mod message;
pub mod numeric;

pub use failure::{FailureKind, ValidationFailure};
pub use length::HasLength;
pub use message::{StaticMessage, ValidationMessage};
pub use numeric::HasZero;
