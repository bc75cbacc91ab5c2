//! Property-based tests for the identifier catalog and dispatcher.
//!
//! Exercises name round-trips, validation, and dispatch identity across
//! randomly chosen catalog members and arbitrary input strings.

use proptest::prelude::*;
use resona_registry::AlgorithmId;

proptest! {
    /// Any catalog member's canonical name resolves back to the same member.
    #[test]
    fn name_round_trips(index in 0..AlgorithmId::COUNT) {
        let id = AlgorithmId::ALL[index];
        prop_assert_eq!(AlgorithmId::from_name(id.name()), Some(id));
        prop_assert_eq!(id.name().parse::<AlgorithmId>(), Ok(id));
    }

    /// Dispatch resolves every catalog member to its own registry entry,
    /// and does so deterministically.
    #[test]
    fn dispatch_identity(index in 0..AlgorithmId::COUNT) {
        let id = AlgorithmId::ALL[index];
        let descriptor = id.descriptor();
        prop_assert_eq!(descriptor.id, id);
        prop_assert_eq!(descriptor.name, id.name());
        prop_assert_eq!(id.descriptor(), descriptor);
    }

    /// `is_valid` agrees with membership in the catalog for arbitrary
    /// strings, including ones that look like plausible algorithm names.
    #[test]
    fn validation_agrees_with_membership(raw in "[A-Za-z0-9]{0,32}") {
        let member = AlgorithmId::all().any(|id| id.name() == raw);
        prop_assert_eq!(AlgorithmId::is_valid(&raw), member);
    }

    /// Parsing an invalid string reports the rejected input unchanged.
    #[test]
    fn parse_error_preserves_input(raw in "[a-z]{1,16}") {
        // Lowercase strings never collide with the canonical names, which
        // all start with an uppercase letter.
        let err = raw.parse::<AlgorithmId>().unwrap_err();
        prop_assert_eq!(err.input(), raw.as_str());
    }
}
