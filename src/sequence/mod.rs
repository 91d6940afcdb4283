//! Keyed set operations over iterators.
//!
//! This module provides lazy, order-preserving set operations whose
//! duplicate elimination is driven by a projected key instead of the
//! element type's own equality:
//!
//! - [`KeyedSequence::except_by_key`]: set difference by key
//! - [`KeyedSequence::union_by_key`]: set union by key
//! - [`KeyedSequence::distinct_by_key`]: deduplication of one sequence
//!
//! Each operation also has a `*_by_comparer` form taking an explicit
//! [`KeyedComparer`](crate::comparer::KeyedComparer), for callers that
//! reuse one comparer across operations or supply their own hasher state.
//!
//! # Laziness
//!
//! All adapters are lazy and single-pass: no input is consumed and no
//! projection is invoked before the first `next()` call, and each input
//! element is visited at most once. The resulting sequences are
//! non-restartable; collect them to iterate twice.
//!
//! # Examples
//!
//! ```rust
//! use bykey::sequence::KeyedSequence;
//!
//! let first = vec![1, 2, 3];
//! let second = vec![2, 3, 4];
//!
//! let difference: Vec<i32> = first
//!     .clone()
//!     .into_iter()
//!     .except_by_key(second.clone(), |n| *n)
//!     .collect();
//! assert_eq!(difference, vec![1]);
//!
//! let union: Vec<i32> = first
//!     .into_iter()
//!     .union_by_key(second, |n| *n)
//!     .collect();
//! assert_eq!(union, vec![1, 2, 3, 4]);
//! ```

mod seen;
mod set_ops;

pub(crate) use seen::SeenKeys;
pub use set_ops::{DistinctByKey, ExceptByKey, KeyedSequence, UnionByKey};
