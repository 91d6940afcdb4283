//! Internal duplicate-elimination store with automatic state transitions.
//!
//! `SeenKeys` records the keys already yielded by a sequence adapter.
//! Small key counts stay in inline storage (`SmallVec`) and are checked
//! with a linear `Eq` scan; once the count exceeds the inline threshold
//! the store promotes to a `HashSet` built from the adapter's hasher
//! state. Promotion is one-way: sequence adapters only ever grow their
//! seen set.

use smallvec::SmallVec;
use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::comparer::ProjectionKey;

/// Keys at or below this count are stored inline and scanned linearly.
const INLINE_THRESHOLD: usize = 8;

enum Representation<K, S> {
    Inline(SmallVec<[K; INLINE_THRESHOLD]>),
    Hashed(HashSet<K, S>),
}

pub(crate) struct SeenKeys<K, S> {
    representation: Representation<K, S>,
    hash_builder: S,
}

impl<K, S> SeenKeys<K, S> {
    pub(crate) const fn with_hasher(hash_builder: S) -> Self {
        Self {
            representation: Representation::Inline(SmallVec::new_const()),
            hash_builder,
        }
    }
}

impl<K, S> SeenKeys<K, S>
where
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
    /// Records a key. Returns `true` when the key was not seen before.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        match &mut self.representation {
            Representation::Inline(keys) => {
                if keys.contains(&key) {
                    return false;
                }
                if keys.len() < INLINE_THRESHOLD {
                    keys.push(key);
                    return true;
                }
                let mut promoted = HashSet::with_capacity_and_hasher(
                    INLINE_THRESHOLD + 1,
                    self.hash_builder.clone(),
                );
                promoted.extend(std::mem::take(keys));
                promoted.insert(key);
                self.representation = Representation::Hashed(promoted);
                true
            }
            Representation::Hashed(keys) => keys.insert(key),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
