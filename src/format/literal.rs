//! The `Literal` type - explicit tagged scalar values with defined rendering.

use std::fmt;

/// A scalar value with an explicit rendering for separator strings.
///
/// `Literal` replaces ad-hoc stringification with a tagged value whose
/// rendering rules are fixed:
///
/// - [`Absent`](Self::Absent) renders as `NULL`
/// - [`Bool`](Self::Bool) renders numerically as `1` / `0`
/// - [`Text`](Self::Text) and [`Char`](Self::Char) render wrapped in
///   single quotes (configurable via [`render`](Self::render))
/// - [`Integer`](Self::Integer) and [`Float`](Self::Float) render in
///   decimal form, never quoted
///
/// Conversions exist from the scalar primitives, string types, and
/// `Option` (where `None` converts to `Absent`).
///
/// # Examples
///
/// ```rust
/// use bykey::format::Literal;
///
/// assert_eq!(Literal::from("ada").to_string(), "'ada'");
/// assert_eq!(Literal::from(true).to_string(), "1");
/// assert_eq!(Literal::from(None::<i32>).to_string(), "NULL");
/// assert_eq!(Literal::from(42).to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// An absent value, rendered as `NULL`.
    Absent,
    /// A boolean, rendered as `1` or `0`.
    Bool(bool),
    /// An integer, rendered in decimal form.
    Integer(i128),
    /// A floating-point number, rendered in decimal form.
    Float(f64),
    /// A single character, rendered quoted by default.
    Char(char),
    /// A text value, rendered quoted by default.
    Text(String),
}

impl Literal {
    /// Renders the literal, optionally quoting text and characters.
    ///
    /// Quoting only ever applies to [`Text`](Self::Text) and
    /// [`Char`](Self::Char); every other variant renders identically
    /// regardless of `quote_text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::format::Literal;
    ///
    /// let name = Literal::from("ada");
    /// assert_eq!(name.render(true), "'ada'");
    /// assert_eq!(name.render(false), "ada");
    ///
    /// let flag = Literal::from(false);
    /// assert_eq!(flag.render(true), "0");
    /// ```
    #[must_use]
    pub fn render(&self, quote_text: bool) -> String {
        match self {
            Self::Absent => String::from("NULL"),
            Self::Bool(value) => String::from(if *value { "1" } else { "0" }),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Char(value) if quote_text => format!("'{value}'"),
            Self::Char(value) => value.to_string(),
            Self::Text(value) if quote_text => format!("'{value}'"),
            Self::Text(value) => value.clone(),
        }
    }

    /// Returns `true` if this literal is [`Absent`](Self::Absent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bykey::format::Literal;
    ///
    /// assert!(Literal::from(None::<bool>).is_absent());
    /// assert!(!Literal::from("").is_absent());
    /// ```
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Renders with quoting enabled.
impl fmt::Display for Literal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render(true))
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_literal_from_integer {
    ($($int_type:ty),* $(,)?) => {
        $(
            impl From<$int_type> for Literal {
                fn from(value: $int_type) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_literal_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// `None` converts to [`Literal::Absent`].
impl<T: Into<Self>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

// =============================================================================
// Tests
// =============================================================================
