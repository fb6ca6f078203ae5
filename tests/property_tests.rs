//! Property-based tests for the check invariants.
//!
//! Every check is a pure function of its inputs, so the properties here
//! pin down the relational contracts: strict vs inclusive tie behavior,
//! range inclusivity, and agreement between a check and the predicate it
//! encodes.

use proptest::prelude::*;

use guardrail::argument;
use guardrail::foundation::StaticMessage;

const ANY: StaticMessage = StaticMessage::new("ANY-0001", "Any validation");

proptest! {
    // ========================================================================
    // ORDERING
    // ========================================================================

    #[test]
    fn less_than_agrees_with_the_operator(value in any::<i64>(), other in any::<i64>()) {
        let result = argument::is_less_than(&value, &other, &ANY);
        prop_assert_eq!(result.is_ok(), value < other);
    }

    #[test]
    fn greater_than_agrees_with_the_operator(value in any::<i64>(), other in any::<i64>()) {
        let result = argument::is_greater_than(&value, &other, &ANY);
        prop_assert_eq!(result.is_ok(), value > other);
    }

    #[test]
    fn strict_and_inclusive_differ_only_on_ties(value in any::<i64>(), other in any::<i64>()) {
        let strict = argument::is_less_than(&value, &other, &ANY).is_ok();
        let inclusive = argument::is_less_than_or_equal_to(&value, &other, &ANY).is_ok();
        if value == other {
            prop_assert!(!strict);
            prop_assert!(inclusive);
        } else {
            prop_assert_eq!(strict, inclusive);
        }
    }

    #[test]
    fn ordering_checks_are_mutually_exclusive_on_ties(value in any::<i64>()) {
        prop_assert!(argument::is_less_than(&value, &value, &ANY).is_err());
        prop_assert!(argument::is_greater_than(&value, &value, &ANY).is_err());
        prop_assert!(argument::is_less_than_or_equal_to(&value, &value, &ANY).is_ok());
        prop_assert!(argument::is_greater_than_or_equal_to(&value, &value, &ANY).is_ok());
    }

    #[test]
    fn zero_variants_match_their_two_argument_forms(value in any::<i64>()) {
        prop_assert_eq!(
            argument::is_greater_than_zero(&value, &ANY).is_ok(),
            argument::is_greater_than(&value, &0, &ANY).is_ok(),
        );
        prop_assert_eq!(
            argument::is_less_than_or_equal_to_zero(&value, &ANY).is_ok(),
            argument::is_less_than_or_equal_to(&value, &0, &ANY).is_ok(),
        );
    }

    // ========================================================================
    // RANGES
    // ========================================================================

    #[test]
    fn between_contains_its_own_bounds(low in -1000i64..1000, span in 0i64..1000) {
        let high = low + span;
        prop_assert!(argument::is_between(&low, &low, &high, &ANY).is_ok());
        prop_assert!(argument::is_between(&high, &low, &high, &ANY).is_ok());
    }

    #[test]
    fn between_agrees_with_the_predicate(
        value in any::<i64>(),
        low in any::<i64>(),
        high in any::<i64>(),
    ) {
        let result = argument::is_between(&value, &low, &high, &ANY);
        prop_assert_eq!(result.is_ok(), value >= low && value <= high);
    }

    #[test]
    fn inverted_ranges_reject_everything(value in any::<i64>(), low in any::<i64>(), high in any::<i64>()) {
        prop_assume!(low > high);
        prop_assert!(argument::is_between(&value, &low, &high, &ANY).is_err());
    }

    #[test]
    fn size_between_agrees_with_the_predicate(
        len in 0usize..32,
        min in 0usize..40,
        max in 0usize..40,
    ) {
        let items = vec![0u8; len];
        let result = argument::has_size_between(&items, min, max, &ANY);
        prop_assert_eq!(result.is_ok(), len >= min && len <= max);
    }

    // ========================================================================
    // FLOATS
    // ========================================================================

    #[test]
    fn nan_fails_every_relation(other in any::<f64>()) {
        let nan = f64::NAN;
        prop_assert!(argument::is_less_than(&nan, &other, &ANY).is_err());
        prop_assert!(argument::is_less_than_or_equal_to(&nan, &other, &ANY).is_err());
        prop_assert!(argument::is_greater_than(&nan, &other, &ANY).is_err());
        prop_assert!(argument::is_greater_than_or_equal_to(&nan, &other, &ANY).is_err());
        prop_assert!(argument::is_between(&nan, &other, &other, &ANY).is_err());
    }

    // ========================================================================
    // TEXT
    // ========================================================================

    #[test]
    fn not_blank_is_exactly_non_empty(text in ".*") {
        let result = argument::require_not_blank(Some(text.as_str()), &ANY);
        prop_assert_eq!(result.is_ok(), !text.is_empty());
    }

    #[test]
    fn has_length_counts_chars_not_bytes(text in "\\PC{0,24}") {
        let chars = text.chars().count();
        prop_assert!(argument::has_length(&text, chars, &ANY).is_ok());
        prop_assert!(argument::has_length(&text, chars + 1, &ANY).is_err());
    }

    // ========================================================================
    // CARDINALITY
    // ========================================================================

    #[test]
    fn exactly_one_counts_present_elements(values in proptest::collection::vec(any::<Option<u8>>(), 0..12)) {
        let present = values.iter().filter(|v| v.is_some()).count();
        let result = argument::exactly_one_not_null(&values, &ANY);
        prop_assert_eq!(result.is_ok(), present == 1);
    }

    #[test]
    fn any_not_null_is_an_existence_check(values in proptest::collection::vec(any::<Option<u8>>(), 0..12)) {
        let result = argument::any_not_null(&values, &ANY);
        prop_assert_eq!(result.is_ok(), values.iter().any(Option::is_some));
    }

    // ========================================================================
    // MEMBERSHIP
    // ========================================================================

    #[test]
    fn contains_partitions_with_its_negation(
        value in any::<u8>(),
        allowed in proptest::collection::vec(any::<u8>(), 0..12),
    ) {
        let contains = argument::contains(&value, &allowed, &ANY).is_ok();
        let excludes = argument::does_not_contain(&value, &allowed, &ANY).is_ok();
        prop_assert_ne!(contains, excludes);
    }
}
