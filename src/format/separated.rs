//! Extension traits for joining sequences into separator strings.

use std::fmt::{Display, Write};

use super::Literal;

/// Joins any displayable sequence into a separator string.
///
/// The separator character is configurable, optionally followed by a
/// single space. No separator is emitted after the final item, and an
/// empty sequence produces an empty string.
///
/// # Examples
///
/// ```rust
/// use bykey::format::Separated;
///
/// let fruit = vec!["apple", "banana", "cherry"];
/// assert_eq!(fruit.clone().comma_separated(), "apple, banana, cherry");
/// assert_eq!(fruit.to_separated_string(';', false), "apple;banana;cherry");
/// ```
pub trait Separated: IntoIterator + Sized {
    /// Joins the items with `separator`, appending one space after each
    /// separator when `spaced`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::format::Separated;
    ///
    /// assert_eq!(vec![1, 2, 3].to_separated_string('|', false), "1|2|3");
    /// assert_eq!(Vec::<i32>::new().to_separated_string(',', true), "");
    /// ```
    fn to_separated_string(self, separator: char, spaced: bool) -> String
    where
        Self::Item: Display,
    {
        let mut result = String::new();
        let mut first = true;

        for item in self {
            if !first {
                result.push(separator);
                if spaced {
                    result.push(' ');
                }
            }
            first = false;
            let _ = write!(result, "{item}");
        }

        result
    }

    /// Joins the items with `", "`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::format::Separated;
    ///
    /// assert_eq!(vec!["a", "b"].comma_separated(), "a, b");
    /// ```
    fn comma_separated(self) -> String
    where
        Self::Item: Display,
    {
        self.to_separated_string(',', true)
    }
}

impl<I: IntoIterator + Sized> Separated for I {}

/// Joins labelled values into a separator string of `name=value` entries.
///
/// Values are converted to [`Literal`] and rendered quoted, so text
/// values appear in single quotes, booleans numerically, and absent
/// values as `NULL`.
///
/// # Examples
///
/// ```rust
/// use bykey::format::{Literal, SeparatedPairs};
///
/// let fields = vec![
///     ("name", Literal::from("ada")),
///     ("age", Literal::from(36)),
/// ];
/// assert_eq!(fields.pairs_comma_separated(), "name='ada', age=36");
/// ```
pub trait SeparatedPairs: IntoIterator + Sized {
    /// Joins `name=value` entries with `separator`, appending one space
    /// after each separator when `spaced`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::format::{Literal, SeparatedPairs};
    ///
    /// let fields = vec![("admin", true), ("active", false)];
    /// assert_eq!(
    ///     fields.pairs_to_separated_string(';', false),
    ///     "admin=1;active=0"
    /// );
    /// ```
    fn pairs_to_separated_string<N, V>(self, separator: char, spaced: bool) -> String
    where
        Self: IntoIterator<Item = (N, V)>,
        N: Display,
        V: Into<Literal>,
    {
        let mut result = String::new();
        let mut first = true;

        for (name, value) in self {
            if !first {
                result.push(separator);
                if spaced {
                    result.push(' ');
                }
            }
            first = false;
            let literal: Literal = value.into();
            let _ = write!(result, "{name}={literal}");
        }

        result
    }

    /// Joins `name=value` entries with `", "`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::format::{Literal, SeparatedPairs};
    ///
    /// let fields = vec![("email", Literal::from(None::<String>))];
    /// assert_eq!(fields.pairs_comma_separated(), "email=NULL");
    /// ```
    fn pairs_comma_separated<N, V>(self) -> String
    where
        Self: IntoIterator<Item = (N, V)>,
        N: Display,
        V: Into<Literal>,
    {
        self.pairs_to_separated_string(',', true)
    }
}

impl<I: IntoIterator + Sized> SeparatedPairs for I {}

// =============================================================================
// Tests
// =============================================================================
