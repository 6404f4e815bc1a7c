//! Typed value representation for SGF property values.
//!
//! This module provides the two scalar building blocks of the value
//! model:
//!
//! - [`Number`]: a signed integer with the format's `[+-]?digits` text
//!   syntax
//! - [`Value`]: a tagged union over every value kind a property can
//!   hold (number, formatted text, simple text, composed pair)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use sgf_codec::{Number, SimpleText, Value};
//!
//! let number = Value::from(19);
//! let text = Value::from(SimpleText::new("Japanese").unwrap());
//!
//! assert!(number.is_number());
//! assert!(text.is_simple_text());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use sgf_codec::{Number, Value};
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! let n: i64 = i64::try_from(value).unwrap();
//! assert_eq!(n, 42);
//! ```
//!
//! ### Wire form
//!
//! Every value displays as its bracketed-wire contents:
//!
//! ```rust
//! use sgf_codec::{Number, Value};
//!
//! assert_eq!(Value::from(Number::new(-3)).to_string(), "-3");
//! ```

use crate::compose::Compose;
use crate::error::{Error, Result};
use crate::text::{SimpleText, Text};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A signed integer with the format's `[+-]?digits` text syntax.
///
/// Construction from an integer (or another `Number`) never fails;
/// construction from text fails unless the text is a valid signed
/// decimal literal. The canonical text form has no leading `+`, no
/// redundant zeros, and a sign only when negative.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::Number;
///
/// let n = Number::from_text("+30").unwrap();
/// assert_eq!(n.value(), 30);
/// assert_eq!(n.to_text(), "30");
///
/// assert!(Number::from_text("3.5").is_err());
/// assert!(Number::from_text("thirty").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(i64);

impl Number {
    /// Creates a number from an integer. Never fails.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Number(value)
    }

    /// Parses a number from its text form.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Format`] unless the text matches
    /// `[+-]?digits` and fits in an `i64`.
    pub fn from_text(text: &str) -> Result<Self> {
        text.parse::<i64>()
            .map(Number)
            .map_err(|_| Error::format(format!("invalid number literal '{text}'")))
    }

    /// The wrapped integer.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// The canonical decimal text form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::Number;
    ///
    /// assert_eq!(Number::new(0).to_text(), "0");
    /// assert_eq!(Number::new(-7).to_text(), "-7");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number(value as i64)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl serde::de::Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a signed integer or its decimal text form")
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Number, E> {
                Ok(Number(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Number, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(Number)
                    .map_err(|_| E::custom(format!("number {value} out of range")))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Number, E>
            where
                E: serde::de::Error,
            {
                Number::from_text(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

/// A dynamically-kinded SGF property value.
///
/// Every value a property can carry is one of four kinds. Operations
/// that in the original format description depend on the runtime kind
/// (compose-aware re-encoding, board-size shape checks) pattern match
/// on this enum.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{SimpleText, Value};
///
/// let number = Value::from(19);
/// assert!(number.is_number());
/// assert_eq!(number.as_number().map(|n| n.value()), Some(19));
///
/// let text = Value::from(SimpleText::new("UTF-8").unwrap());
/// assert_eq!(text.to_string(), "UTF-8");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    Text(Text),
    SimpleText(SimpleText),
    Compose(Compose),
}

impl Value {
    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is formatted text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the value is simple text.
    #[inline]
    #[must_use]
    pub const fn is_simple_text(&self) -> bool {
        matches!(self, Value::SimpleText(_))
    }

    /// Returns `true` if the value is a composed pair.
    #[inline]
    #[must_use]
    pub const fn is_compose(&self) -> bool {
        matches!(self, Value::Compose(_))
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is formatted text, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is simple text, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_simple_text(&self) -> Option<&SimpleText> {
        match self {
            Value::SimpleText(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is a composed pair, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_compose(&self) -> Option<&Compose> {
        match self {
            Value::Compose(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(t) => write!(f, "{t}"),
            Value::SimpleText(t) => write!(f, "{t}"),
            Value::Compose(c) => write!(f, "{c}"),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Value::Text(value)
    }
}

impl From<SimpleText> for Value {
    fn from(value: SimpleText) -> Self {
        Value::SimpleText(value)
    }
}

impl From<Compose> for Value {
    fn from(value: Compose) -> Self {
        Value::Compose(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(n.value()),
            _ => Err(Error::custom(format!("expected number, found {value:?}"))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(t) => Ok(t.decoded()),
            Value::SimpleText(t) => Ok(t.decoded()),
            _ => Err(Error::custom(format!("expected text, found {value:?}"))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Number(n) => n.serialize(serializer),
            Value::Text(t) => t.serialize(serializer),
            Value::SimpleText(t) => t.serialize(serializer),
            Value::Compose(c) => serializer.serialize_str(&c.to_string()),
        }
    }
}

// No `Deserialize` for `Value`: a bare wire value cannot distinguish
// formatted from simple text. Deserialize the concrete kind instead.

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_number_from_text() {
        assert_eq!(Number::from_text("30").unwrap().value(), 30);
        assert_eq!(Number::from_text("+30").unwrap().value(), 30);
        assert_eq!(Number::from_text("-4").unwrap().value(), -4);
        assert!(Number::from_text("").is_err());
        assert!(Number::from_text("3 ").is_err());
        assert!(Number::from_text("0x10").is_err());
        assert!(Number::from_text("99999999999999999999").is_err());
    }

    #[test]
    fn test_number_canonical_text() {
        assert_eq!(Number::from_text("+007").unwrap().to_text(), "7");
        assert_eq!(Number::new(-0).to_text(), "0");
        assert_eq!(Number::new(-12).to_text(), "-12");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(42i32), Value::Number(Number::new(42)));
        assert_eq!(Value::from(42i64), Value::Number(Number::new(42)));
        assert_eq!(Number::from(7u8).value(), 7);
        assert_eq!(Number::from(-7i8).value(), -7);
    }

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::from(42);
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Value::SimpleText(SimpleText::new("test").unwrap());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let value = Value::SimpleText(SimpleText::new("hello").unwrap());
        let result: String = TryFrom::try_from(value).unwrap();
        assert_eq!(result, "hello");

        assert!(String::try_from(Value::from(42)).is_err());
    }

    #[test]
    fn test_kind_predicates() {
        let number = Value::from(1);
        assert!(number.is_number());
        assert!(!number.is_text());
        assert!(!number.is_simple_text());
        assert!(!number.is_compose());
        assert_eq!(number.as_number(), Some(Number::new(1)));
        assert!(number.as_simple_text().is_none());
    }

    #[test]
    fn test_display_is_wire_form() {
        assert_eq!(Value::from(-3).to_string(), "-3");
        let text = Value::SimpleText(SimpleText::new(r"a\]b").unwrap());
        assert_eq!(text.to_string(), r"a\]b");
    }
}
