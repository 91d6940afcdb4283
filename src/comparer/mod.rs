//! Keyed equality comparison driven by projection functions.
//!
//! This module provides the fundamental pieces of key-projection equality:
//!
//! - [`ProjectionKey`]: trait for types usable as projected keys
//! - [`KeyedComparer`]: equality and hash-code computation for an element
//!   type, based solely on the key extracted by a caller-supplied
//!   projection function
//! - [`DefaultKeyHasher`]: the hasher state used when none is supplied
//!
//! ## Absence Semantics
//!
//! Two kinds of absence are distinguished:
//!
//! - An **absent element** (`None` passed to [`KeyedComparer::equals`] or
//!   [`KeyedComparer::hash_value`]) hashes to [`ABSENT_ELEMENT_HASH`].
//! - A **present element with an absent key** (a projection returning
//!   `Option::None`) hashes to [`ABSENT_KEY_HASH`].
//!
//! The two sentinels are distinct, so an element cannot be confused with
//! its missing key.
//!
//! # Examples
//!
//! ```rust
//! use bykey::comparer::KeyedComparer;
//!
//! struct Account {
//!     id: u32,
//!     holder: String,
//! }
//!
//! let by_id = KeyedComparer::new(|account: &Account| account.id);
//!
//! let checking = Account { id: 7, holder: String::from("ada") };
//! let savings = Account { id: 7, holder: String::from("grace") };
//!
//! // Same id, different holders: equal by key.
//! assert!(by_id.equivalent(&checking, &savings));
//! ```

mod key;
mod keyed;

pub use key::{ABSENT_ELEMENT_HASH, ABSENT_KEY_HASH, ProjectionKey};
pub use keyed::KeyedComparer;

/// The hasher state used by [`KeyedComparer`] when none is supplied.
///
/// Defaults to the standard library's SipHash-based `RandomState`. The
/// `fxhash` and `ahash` cargo features swap in the corresponding faster,
/// non-cryptographic hasher (with `ahash` winning when both are enabled).
#[cfg(feature = "ahash")]
pub type DefaultKeyHasher = ahash::RandomState;

/// The hasher state used by [`KeyedComparer`] when none is supplied.
///
/// Defaults to the standard library's SipHash-based `RandomState`. The
/// `fxhash` and `ahash` cargo features swap in the corresponding faster,
/// non-cryptographic hasher (with `ahash` winning when both are enabled).
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultKeyHasher = rustc_hash::FxBuildHasher;

/// The hasher state used by [`KeyedComparer`] when none is supplied.
///
/// Defaults to the standard library's SipHash-based `RandomState`. The
/// `fxhash` and `ahash` cargo features swap in the corresponding faster,
/// non-cryptographic hasher (with `ahash` winning when both are enabled).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultKeyHasher = std::collections::hash_map::RandomState;
