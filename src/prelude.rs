//! Prelude module for convenient imports.
//!
//! Brings in the foundation types every caller touches. The check
//! functions themselves are intentionally not glob-exported: the two call
//! surfaces share names (`argument::is_true` vs `condition::is_true`), so
//! call sites stay module-qualified.
//!
//! # Examples
//!
//! ```rust
//! use guardrail::prelude::*;
//! use guardrail::{argument, condition};
//!
//! const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Any validation");
//!
//! fn guard(ready: bool) -> Result<(), ValidationFailure> {
//!     condition::is_true(ready, &MSG)?;
//!     Ok(())
//! }
//! ```

pub use crate::foundation::{
    FailureKind, HasLength, HasZero, StaticMessage, ValidationFailure, ValidationMessage,
};
