//! Composed (paired) property values.
//!
//! A [`Compose`] joins two values with `:`, used where a property's
//! semantics call for a pair (an asymmetric board size, an
//! application name and version). Inside a composed value `:` joins
//! the must-escape set, so any text element is re-derived from its raw
//! input with compose mode on when the pair is built.
//!
//! ## Examples
//!
//! ```rust
//! use sgf_codec::{Compose, Number, SimpleText};
//!
//! let size = Compose::new(Number::new(19), Number::new(18)).unwrap();
//! assert_eq!(size.to_string(), "19:18");
//!
//! // A bare ':' inside an element becomes an error once composed.
//! let name = SimpleText::new("key:value").unwrap();
//! assert!(Compose::new(name, SimpleText::new("x").unwrap()).is_err());
//! ```

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered pair of values joined by `:` on the wire.
///
/// Elements may be any mix of number, formatted text, and simple text;
/// a pair may not itself contain a pair. Cloning a `Compose` (or
/// converting one into a [`Value`]) reuses the pair as-is, without
/// re-escaping.
///
/// Whether the two members are allowed to be equal is decided by the
/// property using the pair, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct Compose {
    left: Box<Value>,
    right: Box<Value>,
}

impl Compose {
    /// Creates a pair from two values.
    ///
    /// Text elements are re-derived from their original raw input with
    /// compose mode on, so an unescaped `:` inside either side fails
    /// with [`Error::Escape`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Validation`] if either element is itself a
    /// composed value, and with [`Error::Escape`] if re-deriving a
    /// text element rejects it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::{Compose, SimpleText};
    ///
    /// let pair = Compose::new(
    ///     SimpleText::new("foo").unwrap(),
    ///     SimpleText::new("10.1").unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(pair.to_string(), "foo:10.1");
    /// ```
    pub fn new(left: impl Into<Value>, right: impl Into<Value>) -> Result<Self> {
        Ok(Compose {
            left: Box::new(Self::element(left.into())?),
            right: Box::new(Self::element(right.into())?),
        })
    }

    /// Creates a pair from a slice of values.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Validation`] unless the slice holds exactly
    /// two elements.
    pub fn from_slice(values: &[Value]) -> Result<Self> {
        match values {
            [left, right] => Self::new(left.clone(), right.clone()),
            _ => Err(Error::validation(format!(
                "compose expects 2 elements, got {}",
                values.len()
            ))),
        }
    }

    fn element(value: Value) -> Result<Value> {
        match value {
            Value::Number(n) => Ok(Value::Number(n)),
            Value::Text(t) => Ok(Value::Text(t.recompose()?)),
            Value::SimpleText(t) => Ok(Value::SimpleText(t.recompose()?)),
            Value::Compose(_) => Err(Error::validation(
                "compose elements must not themselves be composed",
            )),
        }
    }

    /// The left member of the pair.
    #[must_use]
    pub fn left(&self) -> &Value {
        &self.left
    }

    /// The right member of the pair.
    #[must_use]
    pub fn right(&self) -> &Value {
        &self.right
    }
}

impl fmt::Display for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.left, self.right)
    }
}

impl Serialize for Compose {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Splits raw bracket contents at the first unescaped `:`.
///
/// Returns `None` if the contents hold no unescaped `:`.
pub(crate) fn split_raw(raw: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in raw.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ':' {
            return Some((&raw[..i], &raw[i + 1..]));
        }
    }
    None
}
