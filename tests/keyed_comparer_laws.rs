#![cfg(feature = "comparer")]
//! Property-based tests for keyed comparer laws.
//!
//! These tests verify that the comparer satisfies the standard equality
//! contract (reflexivity, symmetry, hash consistency) for arbitrary
//! inputs and projections over them.

use bykey::comparer::{ABSENT_ELEMENT_HASH, ABSENT_KEY_HASH, KeyedComparer};
use proptest::prelude::*;

// =============================================================================
// Reflexivity Law
// Description: every present element is equal to itself
// =============================================================================

proptest! {
    #[test]
    fn prop_reflexivity_law(value: i64) {
        let comparer = KeyedComparer::new(|element: &i64| *element);
        prop_assert!(comparer.equals(Some(&value), Some(&value)));
    }
}

// =============================================================================
// Symmetry Law
// Description: equals(x, y) == equals(y, x), absence included
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetry_law(left: Option<i64>, right: Option<i64>) {
        let comparer = KeyedComparer::new(|element: &i64| element % 7);
        prop_assert_eq!(
            comparer.equals(left.as_ref(), right.as_ref()),
            comparer.equals(right.as_ref(), left.as_ref())
        );
    }
}

// =============================================================================
// Equality-Hash Consistency Law
// Description: equal elements hash equally under the same comparer
// =============================================================================

proptest! {
    #[test]
    fn prop_hash_consistency_law(left: Option<i64>, right: Option<i64>) {
        let comparer = KeyedComparer::new(|element: &i64| element % 7);

        if comparer.equals(left.as_ref(), right.as_ref()) {
            prop_assert_eq!(
                comparer.hash_value(left.as_ref()),
                comparer.hash_value(right.as_ref())
            );
        }
    }
}

// =============================================================================
// Absent Element Sentinel Law
// Description: hash(None) is the same fixed sentinel on every call
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_element_sentinel_law(probe: i64) {
        let comparer = KeyedComparer::new(|element: &i64| *element);

        prop_assert_eq!(comparer.hash_value::<i64, i64>(None), ABSENT_ELEMENT_HASH);
        // A present element is hashed through the hasher, so the probe
        // exercises the non-sentinel path alongside the sentinel one.
        let _ = comparer.hash_value(Some(&probe));
        prop_assert_eq!(comparer.hash_value::<i64, i64>(None), ABSENT_ELEMENT_HASH);
    }
}

// =============================================================================
// Absent Key Sentinel Law
// Description: a present element with an absent key hashes to a fixed
// sentinel distinct from the absent-element sentinel
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_key_sentinel_law(value: u32, key_is_present: bool) {
        let comparer = KeyedComparer::new(
            move |element: &u32| if key_is_present { Some(*element) } else { None }
        );

        let hashed = comparer.hash_value(Some(&value));
        if !key_is_present {
            prop_assert_eq!(hashed, ABSENT_KEY_HASH);
        }
        prop_assert_ne!(ABSENT_KEY_HASH, ABSENT_ELEMENT_HASH);
    }
}

// =============================================================================
// Projection Determinism Law
// Description: repeated calls with the same inputs agree
// =============================================================================

proptest! {
    #[test]
    fn prop_repeatability_law(left: Option<i64>, right: Option<i64>) {
        let comparer = KeyedComparer::new(|element: &i64| element.wrapping_mul(31));

        let first = comparer.equals(left.as_ref(), right.as_ref());
        let second = comparer.equals(left.as_ref(), right.as_ref());
        prop_assert_eq!(first, second);

        let first_hash = comparer.hash_value(left.as_ref());
        let second_hash = comparer.hash_value(left.as_ref());
        prop_assert_eq!(first_hash, second_hash);
    }
}
