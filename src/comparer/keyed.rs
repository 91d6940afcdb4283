//! The `KeyedComparer` - equality and hashing by projected key.

use std::fmt;
use std::hash::BuildHasher;

use super::DefaultKeyHasher;
use super::key::{ABSENT_ELEMENT_HASH, ABSENT_KEY_HASH, ProjectionKey};

/// An equality and hashing strategy that delegates to a projected key.
///
/// A `KeyedComparer` wraps exactly one projection function and one hasher
/// state. Elements compare equal when their projected keys compare equal
/// with the key type's own equality; element hashes are the key's hash
/// through the comparer's hasher. The comparer is immutable once
/// constructed, never owns or mutates elements, and every operation is a
/// pure function of its arguments and the supplied projection.
///
/// The projection must be deterministic and side-effect-free; a panicking
/// projection propagates to the caller uncaught.
///
/// # Laws
///
/// All comparer instances satisfy, for a pure projection:
///
/// ## Reflexivity
///
/// For all present `x`: `equals(Some(x), Some(x))` is `true`.
///
/// ## Symmetry
///
/// For all `x`, `y`: `equals(x, y) == equals(y, x)`.
///
/// ## Equality-Hash Consistency
///
/// For all `x`, `y` with `equals(x, y)` true:
/// ```text
/// hash_value(x) == hash_value(y)
/// ```
///
/// # Examples
///
/// ```rust
/// use bykey::comparer::KeyedComparer;
///
/// let by_length = KeyedComparer::new(|word: &&str| word.len());
///
/// assert!(by_length.equivalent(&"apple", &"lemon"));
/// assert!(!by_length.equivalent(&"apple", &"fig"));
/// ```
#[derive(Clone)]
pub struct KeyedComparer<F, S = DefaultKeyHasher> {
    projection: F,
    hash_builder: S,
}

impl<F> KeyedComparer<F> {
    /// Creates a comparer from a projection, with the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::KeyedComparer;
    ///
    /// let by_first_char = KeyedComparer::new(|word: &String| word.chars().next());
    /// assert!(by_first_char.equivalent(&String::from("banana"), &String::from("ball")));
    /// ```
    #[must_use]
    pub fn new(projection: F) -> Self {
        Self {
            projection,
            hash_builder: DefaultKeyHasher::default(),
        }
    }
}

impl<F, S> KeyedComparer<F, S> {
    /// Creates a comparer from a projection and an explicit hasher state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use bykey::comparer::KeyedComparer;
    ///
    /// let comparer = KeyedComparer::with_hasher(|n: &i32| n % 10, RandomState::new());
    /// assert!(comparer.equivalent(&12, &42));
    /// ```
    #[must_use]
    pub const fn with_hasher(projection: F, hash_builder: S) -> Self {
        Self {
            projection,
            hash_builder,
        }
    }

    /// Returns a reference to the comparer's hasher state.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Applies the projection to a value, returning its key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::KeyedComparer;
    ///
    /// let by_abs = KeyedComparer::new(|n: &i32| n.abs());
    /// assert_eq!(by_abs.key_of(&-4), 4);
    /// ```
    #[inline]
    pub fn key_of<T, K>(&self, value: &T) -> K
    where
        F: Fn(&T) -> K,
        K: ProjectionKey,
    {
        (self.projection)(value)
    }

    /// Determines whether two possibly-absent elements are equal by key.
    ///
    /// Two absent elements are equal; an absent and a present element are
    /// not. Two present elements are equal exactly when their projected
    /// keys are equal under the key type's own equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::KeyedComparer;
    ///
    /// let by_id = KeyedComparer::new(|pair: &(u32, &str)| pair.0);
    ///
    /// let left = (1, "one");
    /// let right = (1, "uno");
    ///
    /// assert!(by_id.equals(Some(&left), Some(&right)));
    /// assert!(by_id.equals(None, None));
    /// assert!(!by_id.equals(Some(&left), None));
    /// ```
    pub fn equals<T, K>(&self, x: Option<&T>, y: Option<&T>) -> bool
    where
        F: Fn(&T) -> K,
        K: ProjectionKey,
    {
        match (x, y) {
            (None, None) => true,
            (None, Some(_)) | (Some(_), None) => false,
            (Some(left), Some(right)) => (self.projection)(left) == (self.projection)(right),
        }
    }

    /// Determines whether two present elements are equal by key.
    ///
    /// Shorthand for [`equals`](Self::equals) with both sides present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::KeyedComparer;
    ///
    /// let by_parity = KeyedComparer::new(|n: &u32| n % 2);
    /// assert!(by_parity.equivalent(&3, &11));
    /// assert!(!by_parity.equivalent(&3, &10));
    /// ```
    #[inline]
    pub fn equivalent<T, K>(&self, x: &T, y: &T) -> bool
    where
        F: Fn(&T) -> K,
        K: ProjectionKey,
    {
        self.equals(Some(x), Some(y))
    }
}

impl<F, S: BuildHasher> KeyedComparer<F, S> {
    /// Computes the hash of a possibly-absent element.
    ///
    /// - An absent element hashes to [`ABSENT_ELEMENT_HASH`].
    /// - A present element whose key is absent hashes to
    ///   [`ABSENT_KEY_HASH`].
    /// - Otherwise the key's own hash is computed through the comparer's
    ///   hasher state.
    ///
    /// Hashes computed by the same comparer instance are consistent with
    /// [`equals`](Self::equals): equal inputs hash equally.
    ///
    /// [`ABSENT_ELEMENT_HASH`]: super::ABSENT_ELEMENT_HASH
    /// [`ABSENT_KEY_HASH`]: super::ABSENT_KEY_HASH
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::{ABSENT_ELEMENT_HASH, KeyedComparer};
    ///
    /// let by_id = KeyedComparer::new(|id: &u32| *id);
    ///
    /// assert_eq!(by_id.hash_value::<u32, u32>(None), ABSENT_ELEMENT_HASH);
    /// assert_eq!(by_id.hash_value(Some(&7)), by_id.hash_value(Some(&7)));
    /// ```
    pub fn hash_value<T, K>(&self, value: Option<&T>) -> u64
    where
        F: Fn(&T) -> K,
        K: ProjectionKey,
    {
        match value {
            None => ABSENT_ELEMENT_HASH,
            Some(element) => {
                let projected = (self.projection)(element);
                if projected.is_absent() {
                    ABSENT_KEY_HASH
                } else {
                    self.hash_builder.hash_one(projected)
                }
            }
        }
    }
}

impl<F, S> fmt::Debug for KeyedComparer<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("KeyedComparer").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(KeyedComparer<fn(&i32) -> i32>: Send, Sync);
static_assertions::assert_impl_all!(KeyedComparer<fn(&String) -> Option<char>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
