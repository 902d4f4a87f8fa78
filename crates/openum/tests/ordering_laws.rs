//! Property-based tests for ordering, equality and hashing.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use openum::prelude::*;
use proptest::prelude::*;

openum::enumerable! {
    pub struct Suit {
        CLUBS = "clubs",
        DIAMONDS = "diamonds",
        HEARTS = "hearts",
        SPADES = "spades",
    }
}

openum::enumerable! {
    pub struct Rank {
        ACE = "ace",
        KING = "king",
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Text that sometimes hits a constant and sometimes varies only by case.
fn suit_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("clubs".to_owned()),
        Just("Clubs".to_owned()),
        Just("hearts".to_owned()),
        Just("HEARTS".to_owned()),
        "[a-zA-Z]{0,6}",
    ]
}

// ============================================================================
// TOTAL ORDER
// ============================================================================

proptest! {
    #[test]
    fn comparison_is_antisymmetric(a in suit_text(), b in suit_text()) {
        let (a, b) = (Suit::parse(&a), Suit::parse(&b));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn comparison_is_transitive(a in suit_text(), b in suit_text(), c in suit_text()) {
        let mut values = [Suit::parse(&a), Suit::parse(&b), Suit::parse(&c)];
        values.sort();
        prop_assert!(values[0] <= values[1]);
        prop_assert!(values[1] <= values[2]);
        prop_assert!(values[0] <= values[2]);
    }

    #[test]
    fn equality_matches_ordering(a in suit_text(), b in suit_text()) {
        let (a, b) = (Suit::parse(&a), Suit::parse(&b));
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
    }

    #[test]
    fn equal_values_hash_alike(a in suit_text(), b in suit_text()) {
        let (a, b) = (Suit::parse(&a), Suit::parse(&b));
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn equality_is_exact_text_equality(a in suit_text(), b in suit_text()) {
        prop_assert_eq!(Suit::parse(&a) == Suit::parse(&b), a == b);
    }
}

// ============================================================================
// CONSTANTS FIRST
// ============================================================================

proptest! {
    #[test]
    fn every_constant_precedes_every_non_constant(text in "[a-zA-Z]{0,8}") {
        let value = Suit::parse(&text);
        prop_assume!(!value.is_constant());
        prop_assert_eq!(value.ordinal(), NO_MATCH);
        for constant in Suit::values() {
            prop_assert!(constant < value);
            prop_assert_eq!(constant.as_open().compare_to(value.as_open()), -1);
        }
    }

    #[test]
    fn case_variants_are_adjacent_but_distinct(text in "[a-z]{1,6}") {
        let lower = Suit::parse(&text);
        let upper = Suit::parse(&text.to_uppercase());
        prop_assume!(!lower.is_constant() && !upper.is_constant());
        prop_assert_ne!(&lower, &upper);
        prop_assert_eq!(upper.cmp(&lower), Ordering::Less);

        // nothing with a different case-folded text sorts between them
        let other = Suit::parse(&format!("{text}x"));
        prop_assert!(other > lower && other > upper);
    }
}

// ============================================================================
// ACROSS TYPES
// ============================================================================

#[test]
fn different_types_never_compare_equal() {
    let suit = Suit::parse("ace");
    let rank = Rank::parse("ace");
    assert_ne!(suit.as_open(), rank.as_open());
    assert_eq!(
        suit.as_open().cmp(rank.as_open()),
        suit.as_open().type_name().cmp(rank.as_open().type_name())
    );
}

#[test]
fn cross_type_order_is_symmetric() {
    let mut mixed: Vec<OpenValue> = vec![
        Rank::parse("king").as_open().clone(),
        Suit::parse("joker").as_open().clone(),
        Rank::parse("two").as_open().clone(),
        Suit::SPADES.as_open().clone(),
    ];
    mixed.sort();
    let texts: Vec<&str> = mixed.iter().map(OpenValue::value).collect();
    // `ordering_laws::Rank` < `ordering_laws::Suit`
    assert_eq!(texts, vec!["king", "two", "spades", "joker"]);

    for a in &mixed {
        for b in &mixed {
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
        }
    }
}
