//! The validation message contract.
//!
//! Every check takes a [`ValidationMessage`]: the stable `(code, message)`
//! pair identifying which rule was being enforced when the check was
//! invoked. Calling modules typically define a fixed, closed set of
//! messages; the core depends only on this two-method capability and never
//! on a concrete enumeration.

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION MESSAGE
// ============================================================================

/// A stable `(code, message)` pair describing a validation rule.
///
/// Implementations are expected to be immutable and cheaply shareable;
/// the same instance is usually referenced by many call sites.
///
/// # Examples
///
/// A per-module closed set, the usual shape:
///
/// ```rust
/// use guardrail::foundation::ValidationMessage;
///
/// enum OrderValidation {
///     QuantityRequired,
///     PriceOutOfRange,
/// }
///
/// impl ValidationMessage for OrderValidation {
///     fn code(&self) -> &str {
///         match self {
///             Self::QuantityRequired => "ORD-0001",
///             Self::PriceOutOfRange => "ORD-0002",
///         }
///     }
///
///     fn message(&self) -> &str {
///         match self {
///             Self::QuantityRequired => "Quantity is required",
///             Self::PriceOutOfRange => "Price is out of range",
///         }
///     }
/// }
/// ```
pub trait ValidationMessage {
    /// The stable code identifying the rule (e.g. `"ORD-0001"`).
    fn code(&self) -> &str;

    /// The human-readable default message for the rule.
    fn message(&self) -> &str;
}

impl<M: ValidationMessage + ?Sized> ValidationMessage for &M {
    fn code(&self) -> &str {
        (**self).code()
    }

    fn message(&self) -> &str {
        (**self).message()
    }
}

// ============================================================================
// STATIC MESSAGE
// ============================================================================

/// A [`ValidationMessage`] backed by two static strings.
///
/// `const`-constructible, so fixed message sets can live in `const` items
/// and be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use guardrail::foundation::{StaticMessage, ValidationMessage};
///
/// const NAME_REQUIRED: StaticMessage =
///     StaticMessage::new("USR-0001", "Name is required");
///
/// assert_eq!(NAME_REQUIRED.code(), "USR-0001");
/// assert_eq!(NAME_REQUIRED.message(), "Name is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticMessage {
    code: &'static str,
    message: &'static str,
}

impl StaticMessage {
    /// Creates a message from two static strings.
    #[must_use]
    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self { code, message }
    }
}

impl ValidationMessage for StaticMessage {
    fn code(&self) -> &str {
        self.code
    }

    fn message(&self) -> &str {
        self.message
    }
}

// ============================================================================
// TESTS
// ============================================================================
