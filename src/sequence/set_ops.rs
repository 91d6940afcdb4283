//! Keyed set operations - difference, union, and deduplication adapters.

use std::hash::BuildHasher;
use std::iter::{Chain, FusedIterator};

use super::SeenKeys;
use crate::comparer::{DefaultKeyHasher, KeyedComparer, ProjectionKey};

/// Keyed set operations over any iterator.
///
/// Each operation deduplicates by a projected key rather than by the
/// element type's own equality, and preserves first-occurrence order.
/// The projection-taking forms construct a [`KeyedComparer`] internally;
/// the `*_by_comparer` forms take one explicitly.
///
/// The returned adapters are lazy and single-pass: nothing is consumed
/// and no projection runs before the first `next()` call. A panicking
/// projection aborts the iteration immediately.
///
/// # Examples
///
/// ```rust
/// use bykey::sequence::KeyedSequence;
///
/// let fresh = vec!["apple", "banana"];
/// let sold = vec!["ball"];
///
/// // "banana" and "ball" share the key 'b' and are excluded.
/// let remaining: Vec<&str> = fresh
///     .into_iter()
///     .except_by_key(sold, |item| item.chars().next())
///     .collect();
/// assert_eq!(remaining, vec!["apple"]);
/// ```
pub trait KeyedSequence: Iterator + Sized {
    /// Set difference by key: the elements of `self` whose keys do not
    /// occur in `other`, deduplicated by key.
    ///
    /// `other` is drained into the seen-key store on the first `next()`
    /// call; `self` is then streamed, yielding the first occurrence of
    /// each surviving key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::sequence::KeyedSequence;
    ///
    /// let difference: Vec<i32> = vec![1, 2, 3]
    ///     .into_iter()
    ///     .except_by_key(vec![2, 3, 4], |n| *n)
    ///     .collect();
    /// assert_eq!(difference, vec![1]);
    /// ```
    fn except_by_key<I, F, K>(self, other: I, projection: F) -> ExceptByKey<Self, I::IntoIter, F, K>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: ProjectionKey,
    {
        self.except_by_comparer(other, KeyedComparer::new(projection))
    }

    /// Set difference by key, with an explicit comparer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::KeyedComparer;
    /// use bykey::sequence::KeyedSequence;
    ///
    /// let by_length = KeyedComparer::new(|word: &&str| word.len());
    /// let difference: Vec<&str> = vec!["fig", "apple"]
    ///     .into_iter()
    ///     .except_by_comparer(vec!["lemon"], by_length)
    ///     .collect();
    /// assert_eq!(difference, vec!["fig"]);
    /// ```
    fn except_by_comparer<I, F, K, S>(
        self,
        other: I,
        comparer: KeyedComparer<F, S>,
    ) -> ExceptByKey<Self, I::IntoIter, F, K, S>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: ProjectionKey,
        S: Clone,
    {
        ExceptByKey {
            seen: SeenKeys::with_hasher(comparer.hasher().clone()),
            first: self,
            second: Some(other.into_iter()),
            comparer,
        }
    }

    /// Set union by key: the elements of `self` followed by those of
    /// `other`, keeping the first occurrence of each key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::sequence::KeyedSequence;
    ///
    /// let union: Vec<i32> = vec![1, 2, 3]
    ///     .into_iter()
    ///     .union_by_key(vec![2, 3, 4], |n| *n)
    ///     .collect();
    /// assert_eq!(union, vec![1, 2, 3, 4]);
    /// ```
    fn union_by_key<I, F, K>(self, other: I, projection: F) -> UnionByKey<Self, I::IntoIter, F, K>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: ProjectionKey,
    {
        self.union_by_comparer(other, KeyedComparer::new(projection))
    }

    /// Set union by key, with an explicit comparer.
    fn union_by_comparer<I, F, K, S>(
        self,
        other: I,
        comparer: KeyedComparer<F, S>,
    ) -> UnionByKey<Self, I::IntoIter, F, K, S>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: ProjectionKey,
        S: Clone,
    {
        UnionByKey {
            seen: SeenKeys::with_hasher(comparer.hasher().clone()),
            source: self.chain(other),
            comparer,
        }
    }

    /// Deduplication of one sequence by key, keeping first occurrences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::sequence::KeyedSequence;
    ///
    /// let distinct: Vec<&str> = vec!["apple", "avocado", "banana"]
    ///     .into_iter()
    ///     .distinct_by_key(|item| item.chars().next())
    ///     .collect();
    /// assert_eq!(distinct, vec!["apple", "banana"]);
    /// ```
    fn distinct_by_key<F, K>(self, projection: F) -> DistinctByKey<Self, F, K>
    where
        F: Fn(&Self::Item) -> K,
        K: ProjectionKey,
    {
        self.distinct_by_comparer(KeyedComparer::new(projection))
    }

    /// Deduplication of one sequence by key, with an explicit comparer.
    fn distinct_by_comparer<F, K, S>(
        self,
        comparer: KeyedComparer<F, S>,
    ) -> DistinctByKey<Self, F, K, S>
    where
        F: Fn(&Self::Item) -> K,
        K: ProjectionKey,
        S: Clone,
    {
        DistinctByKey {
            seen: SeenKeys::with_hasher(comparer.hasher().clone()),
            source: self,
            comparer,
        }
    }
}

impl<I: Iterator> KeyedSequence for I {}

// =============================================================================
// ExceptByKey
// =============================================================================

/// Lazy set-difference iterator returned by
/// [`KeyedSequence::except_by_key`].
///
/// Single-pass and non-restartable. The excluded sequence is drained on
/// the first `next()` call.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ExceptByKey<A, B, F, K, S = DefaultKeyHasher> {
    first: A,
    second: Option<B>,
    comparer: KeyedComparer<F, S>,
    seen: SeenKeys<K, S>,
}

impl<A, B, F, K, S> Iterator for ExceptByKey<A, B, F, K, S>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(excluded) = self.second.take() {
            for element in excluded {
                let _ = self.seen.insert(self.comparer.key_of(&element));
            }
        }

        loop {
            let candidate = self.first.next()?;
            let key = self.comparer.key_of(&candidate);
            if self.seen.insert(key) {
                return Some(candidate);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.first.size_hint().1)
    }
}

impl<A, B, F, K, S> FusedIterator for ExceptByKey<A, B, F, K, S>
where
    A: FusedIterator,
    B: Iterator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
}

// =============================================================================
// UnionByKey
// =============================================================================

/// Lazy set-union iterator returned by [`KeyedSequence::union_by_key`].
///
/// Single-pass and non-restartable.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct UnionByKey<A, B, F, K, S = DefaultKeyHasher> {
    source: Chain<A, B>,
    comparer: KeyedComparer<F, S>,
    seen: SeenKeys<K, S>,
}

impl<A, B, F, K, S> Iterator for UnionByKey<A, B, F, K, S>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        loop {
            let candidate = self.source.next()?;
            let key = self.comparer.key_of(&candidate);
            if self.seen.insert(key) {
                return Some(candidate);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<A, B, F, K, S> FusedIterator for UnionByKey<A, B, F, K, S>
where
    A: FusedIterator,
    B: FusedIterator<Item = A::Item>,
    F: Fn(&A::Item) -> K,
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
}

// =============================================================================
// DistinctByKey
// =============================================================================

/// Lazy deduplication iterator returned by
/// [`KeyedSequence::distinct_by_key`].
///
/// Single-pass and non-restartable.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DistinctByKey<I, F, K, S = DefaultKeyHasher> {
    source: I,
    comparer: KeyedComparer<F, S>,
    seen: SeenKeys<K, S>,
}

impl<I, F, K, S> Iterator for DistinctByKey<I, F, K, S>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let candidate = self.source.next()?;
            let key = self.comparer.key_of(&candidate);
            if self.seen.insert(key) {
                return Some(candidate);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, F, K, S> FusedIterator for DistinctByKey<I, F, K, S>
where
    I: FusedIterator,
    F: Fn(&I::Item) -> K,
    K: ProjectionKey,
    S: BuildHasher + Clone,
{
}

static_assertions::assert_impl_all!(
    DistinctByKey<std::vec::IntoIter<i32>, fn(&i32) -> i32, i32>: Send, Sync
);

// =============================================================================
// Tests
// =============================================================================
