//! Scalar values and the orderings used to sort them.
//!
//! [`ScalarValue`] is implemented for the primitive numbers, `bool`, `char`,
//! the string types and the dynamic [`Scalar`] value. It gives every scalar
//! a numeric form, a text form and a "regular" ordering, which is what
//! [`ScalarList`](crate::collections::ScalarList) and
//! [`ScalarMap`](crate::collections::ScalarMap) build their arithmetic,
//! comparison and sorting on.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use kuria_collections::scalar::{ScalarValue, SortMode};
//!
//! assert_eq!("img12".compare(&"img10", SortMode::Natural), Ordering::Greater);
//! assert_eq!("img12".compare(&"img10", SortMode::String), Ordering::Greater);
//! assert_eq!("img2".compare(&"img10", SortMode::Natural), Ordering::Less);
//! assert_eq!("img2".compare(&"img10", SortMode::String), Ordering::Greater);
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

// =============================================================================
// Number
// =============================================================================

/// The numeric form of a scalar.
///
/// Integer arithmetic stays integral until it overflows or meets a float,
/// at which point the result is promoted to `Float`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// Returns the number as a float.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left.cmp(&right),
            (left, right) => compare_floats(left.as_f64(), right.as_f64()),
        }
    }

    /// Parses the leading numeric part of a string, the way loosely typed
    /// languages read numbers out of text. Non-numeric text yields zero.
    ///
    /// ```rust
    /// use kuria_collections::scalar::Number;
    ///
    /// assert_eq!(Number::parse(" 42 apples"), Number::Int(42));
    /// assert_eq!(Number::parse("2.5e1"), Number::Float(25.0));
    /// assert_eq!(Number::parse("apples"), Number::Int(0));
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();
        let bytes = text.as_bytes();
        let mut end = 0;
        let mut is_float = false;

        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut has_digits = end > digits_start;

        if end < bytes.len() && bytes[end] == b'.' {
            let fraction_start = end + 1;
            let mut cursor = fraction_start;
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            if has_digits || cursor > fraction_start {
                has_digits = true;
                is_float = true;
                end = cursor;
            }
        }

        if !has_digits {
            return Self::Int(0);
        }

        if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut cursor = end + 1;
            if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
                cursor += 1;
            }
            let exponent_start = cursor;
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            if cursor > exponent_start {
                is_float = true;
                end = cursor;
            }
        }

        let literal = &text[..end];
        if !is_float && let Ok(value) = literal.parse::<i64>() {
            return Self::Int(value);
        }
        literal.parse::<f64>().map_or(Self::Int(0), Self::Float)
    }

    /// Returns `true` if `text` is entirely a number, surrounding
    /// whitespace aside.
    fn is_numeric_text(text: &str) -> bool {
        let trimmed = text.trim();
        !trimmed.is_empty()
            && trimmed
                .bytes()
                .all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E'))
            && trimmed.parse::<f64>().is_ok()
    }
}

impl Add for Number {
    type Output = Self;

    #[allow(clippy::cast_precision_loss)]
    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left
                .checked_add(right)
                .map_or_else(|| Self::Float(left as f64 + right as f64), Self::Int),
            (left, right) => Self::Float(left.as_f64() + right.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    #[allow(clippy::cast_precision_loss)]
    fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left
                .checked_mul(right)
                .map_or_else(|| Self::Float(left as f64 * right as f64), Self::Int),
            (left, right) => Self::Float(left.as_f64() * right.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
        }
    }
}

// =============================================================================
// SortMode
// =============================================================================

/// How scalars are compared when sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Compare values by their own type: numbers numerically, text as text,
    /// numeric text numerically. NaN sorts after every number.
    ///
    /// Lists mixing numeric and non-numeric text are not totally ordered
    /// under this mode (`"1e1" > "9" > "1f"` yet `"1e1" < "1f"`), so their
    /// sorted order is unspecified. `Numeric`, `String` and `Natural` are
    /// total.
    #[default]
    Regular,
    /// Compare the numeric forms.
    Numeric,
    /// Compare the text forms byte by byte.
    String,
    /// Compare the text forms case-insensitively.
    StringCaseInsensitive,
    /// Compare the text forms according to the current locale. No locale
    /// database is consulted, so this behaves like [`SortMode::String`].
    LocaleString,
    /// Compare the text forms, treating runs of digits as numbers.
    Natural,
    /// Natural ordering, ignoring case.
    NaturalCaseInsensitive,
}

impl SortMode {
    /// Returns the case-insensitive variant of a text mode. Other modes are
    /// returned unchanged.
    #[must_use]
    pub const fn case_insensitive(self) -> Self {
        match self {
            Self::String | Self::LocaleString => Self::StringCaseInsensitive,
            Self::Natural => Self::NaturalCaseInsensitive,
            other => other,
        }
    }
}

// =============================================================================
// ScalarValue
// =============================================================================

/// A value with a numeric form, a text form and a regular ordering.
pub trait ScalarValue: Clone {
    /// The numeric form.
    fn to_number(&self) -> Number;

    /// The text form.
    fn to_text(&self) -> Cow<'_, str>;

    /// Compares two values by their own type.
    fn compare_regular(&self, other: &Self) -> Ordering;

    /// Compares two values according to `mode`.
    fn compare(&self, other: &Self, mode: SortMode) -> Ordering {
        match mode {
            SortMode::Regular => self.compare_regular(other),
            SortMode::Numeric => self.to_number().compare(other.to_number()),
            SortMode::String | SortMode::LocaleString => {
                self.to_text().as_ref().cmp(other.to_text().as_ref())
            }
            SortMode::StringCaseInsensitive => self
                .to_text()
                .to_lowercase()
                .cmp(&other.to_text().to_lowercase()),
            SortMode::Natural => natural_compare(&self.to_text(), &other.to_text()),
            SortMode::NaturalCaseInsensitive => natural_compare(
                &self.to_text().to_lowercase(),
                &other.to_text().to_lowercase(),
            ),
        }
    }
}

macro_rules! impl_integer_scalar {
    ($($integer:ty),* $(,)?) => {
        $(
            impl ScalarValue for $integer {
                #[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_number(&self) -> Number {
                    i64::try_from(*self).map_or_else(|_| Number::Float(*self as f64), Number::Int)
                }

                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                fn compare_regular(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_scalar {
    ($($float:ty),* $(,)?) => {
        $(
            impl ScalarValue for $float {
                #[allow(clippy::cast_lossless)]
                fn to_number(&self) -> Number {
                    Number::Float(*self as f64)
                }

                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                #[allow(clippy::cast_lossless)]
                fn compare_regular(&self, other: &Self) -> Ordering {
                    compare_floats(*self as f64, *other as f64)
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

impl ScalarValue for bool {
    fn to_number(&self) -> Number {
        Number::Int(i64::from(*self))
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "1" } else { "" })
    }

    fn compare_regular(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl ScalarValue for char {
    fn to_number(&self) -> Number {
        Number::parse(self.encode_utf8(&mut [0; 4]))
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn compare_regular(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl ScalarValue for String {
    fn to_number(&self) -> Number {
        Number::parse(self)
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn compare_regular(&self, other: &Self) -> Ordering {
        compare_text_regular(self, other)
    }
}

impl ScalarValue for &str {
    fn to_number(&self) -> Number {
        Number::parse(self)
    }

    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }

    fn compare_regular(&self, other: &Self) -> Ordering {
        compare_text_regular(self, other)
    }
}

/// Numeric strings compare as numbers, anything else byte by byte.
/// Orders floats numerically with NaN after every number.
fn compare_floats(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or_else(|| left.is_nan().cmp(&right.is_nan()))
}

fn compare_text_regular(left: &str, right: &str) -> Ordering {
    if Number::is_numeric_text(left) && Number::is_numeric_text(right) {
        Number::parse(left).compare(Number::parse(right))
    } else {
        left.cmp(right)
    }
}

// =============================================================================
// Scalar
// =============================================================================

/// A dynamically typed scalar.
///
/// Useful for heterogeneous lists; narrow it to a concrete type with
/// `TryFrom` (see [`Collection::try_cast`](crate::collections::Collection::try_cast)).
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Text.
    String(String),
    /// A boolean.
    Bool(bool),
}

impl ScalarValue for Scalar {
    fn to_number(&self) -> Number {
        match self {
            Self::Int(value) => Number::Int(*value),
            Self::Float(value) => Number::Float(*value),
            Self::String(value) => Number::parse(value),
            Self::Bool(value) => value.to_number(),
        }
    }

    fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(value) => value.to_text(),
            Self::Float(value) => value.to_text(),
            Self::String(value) => Cow::Borrowed(value),
            Self::Bool(value) => value.to_text(),
        }
    }

    fn compare_regular(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::String(left), Self::String(right)) => compare_text_regular(left, right),
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::String(text), _) | (_, Self::String(text)) if !Number::is_numeric_text(text) => {
                self.to_text().as_ref().cmp(other.to_text().as_ref())
            }
            _ => self.to_number().compare(other.to_number()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_text())
    }
}

/// Returned when a [`Scalar`] holds a different type than requested.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("expected {expected}, found {found:?}")]
pub struct ScalarTypeError {
    /// The requested type.
    pub expected: &'static str,
    /// The value that did not match.
    pub found: Scalar,
}

macro_rules! impl_scalar_conversions {
    ($($variant:ident => $target:ty, $name:literal);* $(;)?) => {
        $(
            impl From<$target> for Scalar {
                fn from(value: $target) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Scalar> for $target {
                type Error = ScalarTypeError;

                fn try_from(value: Scalar) -> Result<Self, Self::Error> {
                    match value {
                        Scalar::$variant(inner) => Ok(inner),
                        found => Err(ScalarTypeError { expected: $name, found }),
                    }
                }
            }
        )*
    };
}

impl_scalar_conversions!(
    Int => i64, "an integer";
    Float => f64, "a float";
    String => String, "a string";
    Bool => bool, "a boolean";
);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

// =============================================================================
// Natural ordering
// =============================================================================

/// Compares two strings treating runs of ASCII digits as numbers.
///
/// Leading zeros do not change a run's value; when two runs are equal in
/// value, the shorter one sorts first.
pub fn natural_compare(left: &str, right: &str) -> Ordering {
    let mut left_chars = left.chars().peekable();
    let mut right_chars = right.chars().peekable();

    loop {
        match (left_chars.peek().copied(), right_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left_char), Some(right_char))
                if left_char.is_ascii_digit() && right_char.is_ascii_digit() =>
            {
                let left_run = take_digits(&mut left_chars);
                let right_run = take_digits(&mut right_chars);
                let ordering = compare_digit_runs(&left_run, &right_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(left_char), Some(right_char)) => {
                let ordering = left_char.cmp(&right_char);
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left_chars.next();
                right_chars.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(character) = chars.peek().copied() {
        if !character.is_ascii_digit() {
            break;
        }
        run.push(character);
        chars.next();
    }
    run
}

fn compare_digit_runs(left: &str, right: &str) -> Ordering {
    let left_significant = left.trim_start_matches('0');
    let right_significant = right.trim_start_matches('0');
    left_significant
        .len()
        .cmp(&right_significant.len())
        .then_with(|| left_significant.cmp(right_significant))
        .then_with(|| left.len().cmp(&right.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10", Number::Int(10))]
    #[case("-3.5", Number::Float(-3.5))]
    #[case(".5", Number::Float(0.5))]
    #[case("7 days", Number::Int(7))]
    #[case("", Number::Int(0))]
    #[case("-", Number::Int(0))]
    fn test_parse(#[case] text: &str, #[case] expected: Number) {
        assert_eq!(Number::parse(text), expected);
    }

    #[rstest]
    fn test_add_overflow_promotes_to_float() {
        let sum = Number::Int(i64::MAX) + Number::Int(1);
        assert!(matches!(sum, Number::Float(_)));
    }

    #[rstest]
    fn test_mixed_add_is_float() {
        assert_eq!(Number::Int(1) + Number::Float(0.5), Number::Float(1.5));
    }

    #[rstest]
    #[case("a2", "a10", Ordering::Less)]
    #[case("a10", "a10", Ordering::Equal)]
    #[case("a01", "a1", Ordering::Greater)]
    #[case("b1", "a2", Ordering::Greater)]
    #[case("x", "x1", Ordering::Less)]
    fn test_natural_compare(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(natural_compare(left, right), expected);
    }

    #[rstest]
    fn test_regular_compares_numeric_strings_numerically() {
        assert_eq!("10".compare_regular(&"9"), Ordering::Greater);
        assert_eq!("abc".compare_regular(&"abd"), Ordering::Less);
    }

    #[rstest]
    #[case(f64::NAN, 1.0, Ordering::Greater)]
    #[case(f64::NEG_INFINITY, f64::NAN, Ordering::Less)]
    #[case(f64::NAN, f64::NAN, Ordering::Equal)]
    #[case(2.0, 1.5, Ordering::Greater)]
    fn test_float_regular_places_nan_last(#[case] left: f64, #[case] right: f64, #[case] expected: Ordering) {
        assert_eq!(left.compare(&right, SortMode::Regular), expected);
        assert_eq!(Number::Float(left).compare(Number::Float(right)), expected);
    }

    #[rstest]
    fn test_case_insensitive_string_mode() {
        let mode = SortMode::String.case_insensitive();
        assert_eq!("Apple".compare(&"apple", mode), Ordering::Equal);
        assert_eq!("Apple".compare(&"apple", SortMode::String), Ordering::Less);
    }

    #[rstest]
    fn test_scalar_try_from() {
        assert_eq!(i64::try_from(Scalar::Int(4)), Ok(4));
        assert!(bool::try_from(Scalar::Int(4)).is_err());
    }
}
