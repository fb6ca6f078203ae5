//! Text checks: blankness, length, and pattern matching.
//!
//! Two definitions of "blank" coexist here, each documented on its
//! function: the single-value checks treat blank as strictly zero-length,
//! while the multi-value family also treats whitespace-only text (and
//! absent elements) as blank.
//!
//! Length is counted in Unicode scalar values (chars), not bytes.

use regex::Regex;

use crate::foundation::{ValidationFailure, ValidationMessage};

// ============================================================================
// BLANKNESS
// ============================================================================

/// Fails with `RequiredMissing` if the text is absent, or with
/// `InvalidArgument` if it is non-empty.
///
/// "Blank" here is strictly zero-length; whitespace counts as content.
pub fn require_blank<M>(value: Option<&str>, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    match value {
        None => Err(ValidationFailure::required_missing(message)),
        Some(text) if !text.is_empty() => Err(ValidationFailure::invalid_argument(message)),
        Some(_) => Ok(()),
    }
}

/// Fails with `RequiredMissing` if the text is absent, or with
/// `InvalidArgument` if it is empty.
///
/// "Blank" here is strictly zero-length; a whitespace-only string passes.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::require_not_blank;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Text is required");
///
/// assert!(require_not_blank(Some("any string"), &MSG).is_ok());
/// assert!(require_not_blank(Some(""), &MSG).is_err());
/// assert!(require_not_blank(None, &MSG).is_err());
/// ```
pub fn require_not_blank<M>(value: Option<&str>, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    match value {
        None => Err(ValidationFailure::required_missing(message)),
        Some(text) if text.is_empty() => Err(ValidationFailure::invalid_argument(message)),
        Some(_) => Ok(()),
    }
}

/// Fails with `InvalidArgument` iff every element is blank.
///
/// Absent elements and whitespace-only text count as blank. An empty slice
/// counts as "all blank" and fails.
pub fn any_not_blank<S, M>(values: &[Option<S>], message: &M) -> Result<(), ValidationFailure>
where
    S: AsRef<str>,
    M: ValidationMessage + ?Sized,
{
    if values
        .iter()
        .flatten()
        .any(|text| !text.as_ref().trim().is_empty())
    {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message))
    }
}

/// Fails with `InvalidArgument` unless exactly one element is non-blank.
///
/// Absent elements and whitespace-only text count as blank. Short-circuits
/// on the second non-blank element; the zero-count case (including the
/// empty slice) requires the full scan.
pub fn exactly_one_not_blank<S, M>(
    values: &[Option<S>],
    message: &M,
) -> Result<(), ValidationFailure>
where
    S: AsRef<str>,
    M: ValidationMessage + ?Sized,
{
    let mut present = 0usize;
    for value in values {
        if value
            .as_ref()
            .is_some_and(|text| !text.as_ref().trim().is_empty())
        {
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

// ============================================================================
// LENGTH
// ============================================================================

/// Fails with `InvalidArgument` if the char count differs from `length`.
///
/// Failure params: `[value, length]`; the text subject is attached along
/// with the expected bound (unlike the container [`has_size`] variant,
/// which attaches the bound only).
///
/// [`has_size`]: crate::argument::has_size
pub fn has_length<M>(value: &str, length: usize, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    if value.chars().count() == length {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(length))
    }
}

/// Fails with `InvalidArgument` if the char count is outside
/// `min..=max` (inclusive both ends).
///
/// Failure params: `[value, min, max]`.
pub fn has_length_between<M>(
    value: &str,
    min: usize,
    max: usize,
    message: &M,
) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    let length = value.chars().count();
    if length < min || length > max {
        return Err(ValidationFailure::invalid_argument(message)
            .with_param(value)
            .with_param(min)
            .with_param(max));
    }
    Ok(())
}

// ============================================================================
// PATTERN
// ============================================================================

/// Fails with `InvalidArgument` if the whole text does not match the
/// pattern.
///
/// The pattern is compiled in full-string-anchor mode (wrapped in
/// `\A(?:…)\z`): the entire subject must match, not merely contain a
/// match. Failure params on mismatch: `[value]`.
///
/// A syntactically invalid pattern is itself an invalid argument of the
/// check and fails with `InvalidArgument` carrying `[pattern]`.
///
/// # Examples
///
/// ```rust
/// use guardrail::argument::matches_pattern;
/// use guardrail::foundation::StaticMessage;
///
/// const MSG: StaticMessage = StaticMessage::new("ANY-0001", "Bad format");
///
/// assert!(matches_pattern("123-45", r"\d{3}-\d{2}", &MSG).is_ok());
/// assert!(matches_pattern("12-345", r"\d{3}-\d{2}", &MSG).is_err());
/// // Containment is not enough; the full text must match.
/// assert!(matches_pattern("x123-45x", r"\d{3}-\d{2}", &MSG).is_err());
/// ```
pub fn matches_pattern<M>(value: &str, pattern: &str, message: &M) -> Result<(), ValidationFailure>
where
    M: ValidationMessage + ?Sized,
{
    let Ok(anchored) = Regex::new(&format!(r"\A(?:{pattern})\z")) else {
        return Err(ValidationFailure::invalid_argument(message).with_param(pattern));
    };

    if anchored.is_match(value) {
        Ok(())
    } else {
        Err(ValidationFailure::invalid_argument(message).with_param(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FailureKind, StaticMessage};

    const ANY: StaticMessage = StaticMessage::new("ANY-0001", "Any validation");

    #[test]
    fn blank_is_strictly_zero_length() {
        assert!(require_blank(Some(""), &ANY).is_ok());
        assert!(require_blank(Some(" "), &ANY).is_err());
        assert!(require_not_blank(Some(" "), &ANY).is_ok());
    }

    #[test]
    fn absent_text_is_required_missing() {
        let failure = require_not_blank(None, &ANY).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::RequiredMissing);

        let failure = require_blank(None, &ANY).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::RequiredMissing);
    }

    #[test]
    fn multi_value_blankness_trims_whitespace() {
        assert!(any_not_blank(&[Some("  "), Some("x"), None], &ANY).is_ok());
        assert!(any_not_blank(&[Some("  "), Some(""), None], &ANY).is_err());

        assert!(exactly_one_not_blank(&[Some("  "), Some("x"), None], &ANY).is_ok());
        assert!(exactly_one_not_blank(&[Some("y"), Some("x"), None], &ANY).is_err());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(has_length("héllo", 5, &ANY).is_ok());
        assert!(has_length_between("héllo", 5, 5, &ANY).is_ok());
    }

    #[test]
    fn length_failure_attaches_text_and_bound() {
        let failure = has_length("any string", 5, &ANY).unwrap_err();
        assert_eq!(failure.params(), ["any string", "5"]);
    }

    #[test]
    fn invalid_pattern_is_invalid_argument() {
        let failure = matches_pattern("text", "(unclosed", &ANY).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::InvalidArgument);
        assert_eq!(failure.params(), ["(unclosed"]);
    }
}
