//! Separated-string formatting for sequences and labelled scalar values.
//!
//! This module provides the string-joining half of the library:
//!
//! - [`Literal`]: an explicit tagged scalar value with defined rendering
//!   for absent values, booleans, numbers, and quoted text
//! - [`Separated`]: joining any displayable sequence with a configurable
//!   separator
//! - [`SeparatedPairs`]: joining labelled values as `name=value` entries
//!
//! Absence is only ever [`Literal::Absent`], sourced from `Option::None`
//! or written explicitly; an empty string or collection is a present
//! value that happens to be empty, and is never rendered as absent.
//!
//! # Examples
//!
//! ```rust
//! use bykey::format::{Literal, Separated, SeparatedPairs};
//!
//! let fruit = vec!["apple", "banana"];
//! assert_eq!(fruit.comma_separated(), "apple, banana");
//!
//! let fields = vec![
//!     ("name", Literal::from("ada")),
//!     ("admin", Literal::from(true)),
//!     ("email", Literal::from(None::<String>)),
//! ];
//! assert_eq!(
//!     fields.pairs_comma_separated(),
//!     "name='ada', admin=1, email=NULL"
//! );
//! ```

mod literal;
mod separated;

pub use literal::Literal;
pub use separated::{Separated, SeparatedPairs};
