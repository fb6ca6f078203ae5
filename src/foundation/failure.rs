//! The failure taxonomy.
//!
//! A [`ValidationFailure`] is constructed at the exact point a check
//! detects a violation and is returned to the caller by ordinary `Result`
//! propagation. It is never retried and never mutated after construction:
//! every failure is the deterministic consequence of the inputs given.
//!
//! Failure parameters use a small vector: most checks attach zero to three
//! values, so the common case never touches the heap for the spine.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::foundation::message::ValidationMessage;

/// Ordered diagnostic parameters of a failure.
type Params = SmallVec<[Cow<'static, str>; 3]>;

// ============================================================================
// FAILURE KIND
// ============================================================================

/// The closed set of failure categories.
///
/// Each check maps deterministically to exactly one kind. The last three
/// kinds are never constructed by the generic checks in this crate; they
/// exist so callers raising "entity not found" / "already exists" /
/// "collaborator absent" failures share the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A mandatory value was absent.
    RequiredMissing,
    /// A present value failed a validity rule.
    InvalidArgument,
    /// A business condition the caller asserts does not hold.
    NotAllowed,
    /// A referenced entity could not be located (caller-constructed).
    NotFound,
    /// A referenced entity already exists (caller-constructed).
    Duplicate,
    /// A required collaborator was absent (caller-constructed).
    DependencyMissing,
}

impl FailureKind {
    /// The snake_case tag used in rendering and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiredMissing => "required_missing",
            Self::InvalidArgument => "invalid_argument",
            Self::NotAllowed => "not_allowed",
            Self::NotFound => "not_found",
            Self::Duplicate => "duplicate",
            Self::DependencyMissing => "dependency_missing",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// A categorized, parameterized validation failure.
///
/// Carries the [`FailureKind`], the `(code, message)` pair of the
/// triggering [`ValidationMessage`], and the literal argument values of
/// the failing call, in call order. Parameters are empty where a check
/// deliberately omits diagnostic payload (boolean gates, presence checks).
///
/// # Examples
///
/// ```rust
/// use guardrail::foundation::{FailureKind, StaticMessage, ValidationFailure};
///
/// const NOT_IN_STOCK: StaticMessage =
///     StaticMessage::new("INV-0404", "Item is not in stock");
///
/// // Caller-reserved kinds are raised through the same helpers the
/// // built-in checks use:
/// let failure = ValidationFailure::not_found(&NOT_IN_STOCK).with_param("sku-981");
///
/// assert_eq!(failure.kind(), FailureKind::NotFound);
/// assert_eq!(failure.to_string(), "not_found(INV-0404): Item is not in stock (sku-981)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", render(kind, code, message, params))]
pub struct ValidationFailure {
    kind: FailureKind,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    #[serde(rename = "parameters")]
    params: Params,
}

impl ValidationFailure {
    /// Creates a failure of the given kind from a validation message.
    #[must_use]
    pub fn new(kind: FailureKind, message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self {
            kind,
            code: Cow::Owned(message.code().to_owned()),
            message: Cow::Owned(message.message().to_owned()),
            params: Params::new(),
        }
    }

    /// Creates a [`FailureKind::RequiredMissing`] failure.
    #[must_use]
    pub fn required_missing(message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self::new(FailureKind::RequiredMissing, message)
    }

    /// Creates a [`FailureKind::InvalidArgument`] failure.
    #[must_use]
    pub fn invalid_argument(message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self::new(FailureKind::InvalidArgument, message)
    }

    /// Creates a [`FailureKind::NotAllowed`] failure.
    #[must_use]
    pub fn not_allowed(message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self::new(FailureKind::NotAllowed, message)
    }

    /// Creates a [`FailureKind::NotFound`] failure.
    #[must_use]
    pub fn not_found(message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    /// Creates a [`FailureKind::Duplicate`] failure.
    #[must_use]
    pub fn duplicate(message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self::new(FailureKind::Duplicate, message)
    }

    /// Creates a [`FailureKind::DependencyMissing`] failure.
    #[must_use]
    pub fn dependency_missing(message: &(impl ValidationMessage + ?Sized)) -> Self {
        Self::new(FailureKind::DependencyMissing, message)
    }

    /// Appends a parameter rendered with `Display`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, value: impl fmt::Display) -> Self {
        self.params.push(Cow::Owned(value.to_string()));
        self
    }

    /// Appends a parameter rendered with `Debug`.
    ///
    /// Used for generic subjects that have no `Display` rendering
    /// (equality and membership checks).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_debug_param(mut self, value: &impl fmt::Debug) -> Self {
        self.params.push(Cow::Owned(format!("{value:?}")));
        self
    }

    /// The failure category.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The code of the triggering validation message.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message of the triggering validation message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The literal argument values of the failing call, in call order.
    #[must_use]
    pub fn params(&self) -> &[Cow<'static, str>] {
        &self.params
    }

    /// Converts the failure to a JSON value in the
    /// `{ kind, code, message, parameters }` shape.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind.as_str(),
            "code": self.code,
            "message": self.message,
            "parameters": self.params,
        })
    }
}

/// Renders `<kind>(<code>): <message>` plus the comma-joined parameters
/// when any are present.
fn render(kind: &FailureKind, code: &str, message: &str, params: &[Cow<'static, str>]) -> String {
    use fmt::Write as _;

    let mut out = format!("{kind}({code}): {message}");
    if !params.is_empty() {
        out.push_str(" (");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{param}");
        }
        out.push(')');
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
