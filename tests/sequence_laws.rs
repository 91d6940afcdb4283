#![cfg(feature = "sequence")]
//! Property-based tests for keyed sequence operation laws.
//!
//! These tests verify the set-algebra properties of `except_by_key`,
//! `union_by_key`, and `distinct_by_key` for arbitrary inputs, using a
//! narrowing projection (`n % 10`) so key collisions are frequent.

use bykey::sequence::KeyedSequence;
use proptest::prelude::*;
use std::collections::HashSet;

fn key_of(n: &i32) -> i32 {
    n.rem_euclid(10)
}

fn keys_of(elements: &[i32]) -> HashSet<i32> {
    elements.iter().map(key_of).collect()
}

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..50)
}

// =============================================================================
// Except Exclusion Law
// Description: no yielded key occurs in the second sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_except_exclusion_law(first in small_vec(), second in small_vec()) {
        let difference: Vec<i32> = first
            .into_iter()
            .except_by_key(second.clone(), key_of)
            .collect();

        let excluded = keys_of(&second);
        prop_assert!(difference.iter().all(|n| !excluded.contains(&key_of(n))));
    }
}

// =============================================================================
// Except Subsequence Law
// Description: the output is a subsequence of the first input
// =============================================================================

proptest! {
    #[test]
    fn prop_except_subsequence_law(first in small_vec(), second in small_vec()) {
        let difference: Vec<i32> = first
            .clone()
            .into_iter()
            .except_by_key(second, key_of)
            .collect();

        let mut remaining = first.iter();
        for yielded in &difference {
            prop_assert!(remaining.any(|element| element == yielded));
        }
    }
}

// =============================================================================
// Unique Keys Law
// Description: no two yielded elements of any adapter share a key
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_keys_law(first in small_vec(), second in small_vec()) {
        let union: Vec<i32> = first
            .clone()
            .into_iter()
            .union_by_key(second.clone(), key_of)
            .collect();
        let difference: Vec<i32> = first
            .clone()
            .into_iter()
            .except_by_key(second, key_of)
            .collect();
        let distinct: Vec<i32> = first.into_iter().distinct_by_key(key_of).collect();

        for output in [union, difference, distinct] {
            let unique: HashSet<i32> = output.iter().map(key_of).collect();
            prop_assert_eq!(unique.len(), output.len());
        }
    }
}

// =============================================================================
// Union Coverage Law
// Description: the union's key set is the union of both inputs' key sets
// =============================================================================

proptest! {
    #[test]
    fn prop_union_coverage_law(first in small_vec(), second in small_vec()) {
        let union: Vec<i32> = first
            .clone()
            .into_iter()
            .union_by_key(second.clone(), key_of)
            .collect();

        let mut expected = keys_of(&first);
        expected.extend(keys_of(&second));
        prop_assert_eq!(keys_of(&union), expected);
    }
}

// =============================================================================
// Union Identity Law
// Description: union with an empty sequence is distinct
// =============================================================================

proptest! {
    #[test]
    fn prop_union_identity_law(elements in small_vec()) {
        let union: Vec<i32> = elements
            .clone()
            .into_iter()
            .union_by_key(Vec::new(), key_of)
            .collect();
        let distinct: Vec<i32> = elements.into_iter().distinct_by_key(key_of).collect();

        prop_assert_eq!(union, distinct);
    }
}

// =============================================================================
// Distinct Idempotence Law
// Description: deduplicating twice equals deduplicating once
// =============================================================================

proptest! {
    #[test]
    fn prop_distinct_idempotence_law(elements in small_vec()) {
        let once: Vec<i32> = elements.into_iter().distinct_by_key(key_of).collect();
        let twice: Vec<i32> = once.clone().into_iter().distinct_by_key(key_of).collect();

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// First Occurrence Law
// Description: each surviving key is represented by its earliest element
// =============================================================================

proptest! {
    #[test]
    fn prop_first_occurrence_law(elements in small_vec()) {
        let distinct: Vec<i32> = elements
            .clone()
            .into_iter()
            .distinct_by_key(key_of)
            .collect();

        for yielded in &distinct {
            let earliest = elements
                .iter()
                .find(|element| key_of(element) == key_of(yielded));
            prop_assert_eq!(earliest, Some(yielded));
        }
    }
}
