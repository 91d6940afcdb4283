//! # bykey
//!
//! Key-projection equality, hashing, and deduplicating sequence
//! operations.
//!
//! ## Overview
//!
//! This library parameterizes equality by a *projection*: a pure function
//! extracting a comparable key from a richer element value. Elements are
//! then compared, hashed, and deduplicated by their projected keys without
//! requiring the element type to implement equality itself. It includes:
//!
//! - **Keyed Comparer**: equality and hash-code computation driven by a
//!   caller-supplied projection, with defined absence semantics
//! - **Sequence Operations**: `except_by_key`, `union_by_key`, and
//!   `distinct_by_key` — lazy, order-preserving set operations over
//!   iterators, deduplicated by projected key
//! - **Separated Formatting**: joining sequences and labelled scalar
//!   values into separator strings with explicit absent-value rendering
//!
//! ## Feature Flags
//!
//! - `comparer`: the keyed comparer and the `ProjectionKey` trait
//! - `sequence`: keyed sequence operations (implies `comparer`)
//! - `format`: separated-string formatting
//! - `full`: enable all features
//! - `fxhash` / `ahash`: swap the default key hasher for a faster,
//!   non-cryptographic one
//!
//! ## Example
//!
//! ```rust
//! use bykey::prelude::*;
//!
//! let fresh = vec!["apple", "banana"];
//! let sold = vec!["ball"];
//!
//! // Dedupe by first character: "banana" shares a key with "ball".
//! let remaining: Vec<&str> = fresh
//!     .into_iter()
//!     .except_by_key(sold, |item| item.chars().next())
//!     .collect();
//! assert_eq!(remaining, vec!["apple"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use bykey::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "comparer")]
    pub use crate::comparer::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "format")]
    pub use crate::format::*;
}

#[cfg(feature = "comparer")]
pub mod comparer;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "format")]
pub mod format;
