//! Argument checks.
//!
//! Guard clauses for the *inputs* of an operation. An absent mandatory
//! value fails with [`FailureKind::RequiredMissing`]; a present value that
//! breaks a validity rule fails with [`FailureKind::InvalidArgument`].
//!
//! Every check is pure and total: it either returns `Ok(())` or constructs
//! a failure from the supplied [`ValidationMessage`](crate::foundation::ValidationMessage)
//! and returns immediately.
//!
//! [`FailureKind::RequiredMissing`]: crate::foundation::FailureKind::RequiredMissing
//! [`FailureKind::InvalidArgument`]: crate::foundation::FailureKind::InvalidArgument

mod boolean;
mod compare;
mod membership;
mod presence;
mod size;
mod text;
mod types;

pub use boolean::{is_false, is_true};
pub use compare::{
    is_between, is_equal_to, is_greater_than, is_greater_than_or_equal_to,
    is_greater_than_or_equal_to_zero, is_greater_than_zero, is_less_than,
    is_less_than_or_equal_to, is_less_than_or_equal_to_zero, is_less_than_zero, is_not_equal_to,
    is_not_equal_to_zero,
};
pub use membership::{contains, does_not_contain};
pub use presence::{any_not_null, exactly_one_not_null, require_not_null, require_null};
pub use size::{has_size, has_size_between, require_empty, require_not_empty};
pub use text::{
    any_not_blank, exactly_one_not_blank, has_length, has_length_between, matches_pattern,
    require_blank, require_not_blank,
};
pub use types::is_instance_of;
