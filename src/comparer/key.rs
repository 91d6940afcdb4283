//! The `ProjectionKey` trait - types usable as projected keys.
//!
//! A projection function extracts a key from a richer element value; the
//! key then stands in for the element in equality and hash computations.
//! [`ProjectionKey`] marks the types suitable for that role: they must
//! support equality and hashing, and they must report whether a given
//! value represents an *absent* key.
//!
//! Key absence is the `Option` lift: a projection returning `Option<K>`
//! produces `None` for elements that have no key, and `None` reports
//! `is_absent() == true`. Every other implementation is always present.
//! Note that emptiness is not absence: an empty `String` or `Vec` key is
//! a present key that happens to be empty.
//!
//! # Examples
//!
//! ```rust
//! use bykey::comparer::ProjectionKey;
//!
//! assert!(!42_u32.is_absent());
//! assert!(!String::new().is_absent());
//!
//! let missing: Option<u32> = None;
//! assert!(missing.is_absent());
//! assert!(!Some(42_u32).is_absent());
//! ```

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Hash value reported for an absent element.
///
/// Returned by [`KeyedComparer::hash_value`](super::KeyedComparer::hash_value)
/// when the element itself is `None`. Fixed across calls and across
/// comparer instances.
pub const ABSENT_ELEMENT_HASH: u64 = u64::MIN;

/// Hash value reported for a present element whose projected key is absent.
///
/// Returned by [`KeyedComparer::hash_value`](super::KeyedComparer::hash_value)
/// when the projection yields a key with `is_absent() == true`. Distinct
/// from [`ABSENT_ELEMENT_HASH`], so a missing element and a missing key
/// never collide by construction.
pub const ABSENT_KEY_HASH: u64 = u64::MAX;

/// A type class for types usable as projected keys.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Equality-Hash Consistency
///
/// For all `a`, `b` with `a == b`:
/// ```text
/// hash(a) == hash(b)
/// ```
/// (inherited from the `Eq + Hash` supertraits)
///
/// ## Absence Stability
///
/// `is_absent` is a pure function of the value: the same key value always
/// reports the same absence.
///
/// # Examples
///
/// ```rust
/// use bykey::comparer::ProjectionKey;
///
/// assert!(!'a'.is_absent());
/// assert!(None::<char>.is_absent());
/// ```
pub trait ProjectionKey: Eq + Hash {
    /// Returns `true` if this value represents an absent key.
    ///
    /// Only the `Option` implementation can report `true`; all other
    /// provided implementations are always present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::comparer::ProjectionKey;
    ///
    /// assert!(!7_i64.is_absent());
    /// assert!(None::<i64>.is_absent());
    /// ```
    fn is_absent(&self) -> bool {
        false
    }
}

// =============================================================================
// Scalar Implementations
// =============================================================================

/// Scalar keys are always present.
macro_rules! impl_projection_key {
    ($($key_type:ty),* $(,)?) => {
        $(
            impl ProjectionKey for $key_type {}
        )*
    };
}

impl_projection_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, ()
);

// =============================================================================
// String Implementations
// =============================================================================

/// An empty string is a present key, not an absent one.
impl ProjectionKey for String {}

impl ProjectionKey for str {}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option lifts any key type into one with absence.
///
/// `None` is the absent key; `Some` delegates to the inner key.
impl<K: ProjectionKey> ProjectionKey for Option<K> {
    fn is_absent(&self) -> bool {
        match self {
            None => true,
            Some(key) => key.is_absent(),
        }
    }
}

// =============================================================================
// Reference and Smart Pointer Implementations
// =============================================================================

/// References delegate to the referenced key.
impl<K: ProjectionKey + ?Sized> ProjectionKey for &K {
    fn is_absent(&self) -> bool {
        K::is_absent(self)
    }
}

/// Boxed keys delegate to the boxed value.
impl<K: ProjectionKey + ?Sized> ProjectionKey for Box<K> {
    fn is_absent(&self) -> bool {
        K::is_absent(self)
    }
}

/// Shared keys delegate to the shared value.
impl<K: ProjectionKey + ?Sized> ProjectionKey for Arc<K> {
    fn is_absent(&self) -> bool {
        K::is_absent(self)
    }
}

/// Shared keys delegate to the shared value.
impl<K: ProjectionKey + ?Sized> ProjectionKey for Rc<K> {
    fn is_absent(&self) -> bool {
        K::is_absent(self)
    }
}

// =============================================================================
// Compound Implementations
// =============================================================================

/// An empty vector is a present key, not an absent one.
impl<K: ProjectionKey> ProjectionKey for Vec<K> {}

/// Pairs are present even when their components are absent.
impl<A: ProjectionKey, B: ProjectionKey> ProjectionKey for (A, B) {}

impl<A: ProjectionKey, B: ProjectionKey, C: ProjectionKey> ProjectionKey for (A, B, C) {}

// =============================================================================
// Tests
// =============================================================================
