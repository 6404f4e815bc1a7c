//! The SGF property protocol and the root-property catalog.
//!
//! ## Overview
//!
//! A property is an identifier followed by one or more bracketed
//! values: `GM[1]`, `SZ[19:18]`, `AP[foo:10.1]`. The [`Property`]
//! trait fixes the two wire operations for every typed property:
//!
//! - `serialize` emits the identifier and each value in insertion
//!   order, individually bracketed, with no separators
//! - `deserialize` strips leading whitespace and the identifier,
//!   isolates the first bracketed value, and hands the raw contents to
//!   the implementor's [`Property::from_raw`] for parsing and
//!   validation
//!
//! Concrete properties are thin declarative instances over the value
//! model. The ranged numeric ones (`GM`, `FF`, `ST`) are declared with
//! the [`number_property!`](crate::number_property) macro; the rest
//! are small hand-written structs.
//!
//! ## Usage
//!
//! ```rust
//! use sgf_codec::{Property, GM, SZ};
//!
//! let game = GM::new(1).unwrap();
//! assert_eq!(game.serialize(), "GM[1]");
//!
//! let game = GM::deserialize(" GM[30]").unwrap();
//! assert_eq!(game.number().value(), 30);
//!
//! let board = SZ::rectangular(19, 18).unwrap();
//! assert_eq!(board.serialize(), "SZ[19:18]");
//! ```

use crate::compose::{split_raw, Compose};
use crate::error::{Error, Result};
use crate::text::SimpleText;
use crate::value::{Number, Value};
use std::fmt;

/// The contract every typed SGF property satisfies.
///
/// `serialize` and `deserialize` are provided by the trait;
/// implementors supply the identifier, the ordered value list, and the
/// leaf conversion from raw bracket contents.
pub trait Property: fmt::Display + Sized {
    /// The fixed identifier this property is tagged with on the wire.
    const IDENT: &'static str;

    /// The property's values, in insertion order.
    fn values(&self) -> Vec<Value>;

    /// Converts the raw contents of the first bracketed value into a
    /// typed property.
    ///
    /// # Errors
    ///
    /// Implementors fail with [`Error::Format`] on a malformed value
    /// and [`Error::Validation`] on an out-of-range or ill-shaped one.
    fn from_raw(raw: &str) -> Result<Self>;

    /// Serializes to wire form: the identifier followed by each value
    /// individually bracketed. Never fails; the values are already
    /// valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::{Property, ST};
    ///
    /// let style = ST::new(2).unwrap();
    /// assert_eq!(style.serialize(), "ST[2]");
    /// ```
    fn serialize(&self) -> String {
        let mut out = String::from(Self::IDENT);
        for value in self.values() {
            out.push('[');
            out.push_str(&value.to_string());
            out.push(']');
        }
        out
    }

    /// Deserializes a property from wire text.
    ///
    /// Leading whitespace, and whitespace between the identifier and
    /// the first bracket, is tolerated.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Format`] if the text does not start with
    /// the identifier or holds no bracketed value, plus whatever
    /// [`Property::from_raw`] rejects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::{Property, FF};
    ///
    /// let version = FF::deserialize("\tFF [3] ").unwrap();
    /// assert_eq!(version.number().value(), 3);
    /// ```
    fn deserialize(data: &str) -> Result<Self> {
        Self::from_raw(raw_value(Self::IDENT, data)?)
    }
}

/// Strips the identifier and isolates the first bracketed value,
/// returning its raw contents.
///
/// The two value syntaxes (signed integer, run of non-`]` characters)
/// overlap structurally, so extraction does not disambiguate the kind;
/// the caller's leaf parser does.
///
/// # Errors
///
/// Fails with [`Error::Format`] if the text does not start with
/// `ident` after optional whitespace, or if no bracketed value follows.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::property::raw_value;
///
/// assert_eq!(raw_value("GM", " GM [30]").unwrap(), "30");
/// assert!(raw_value("GM", "FF[3]").is_err());
/// ```
pub fn raw_value<'a>(ident: &str, data: &'a str) -> Result<&'a str> {
    let data = data.trim_start();
    let rest = data
        .strip_prefix(ident)
        .ok_or_else(|| Error::format(format!("missing identifier '{ident}'")))?;
    let body = rest
        .trim_start()
        .strip_prefix('[')
        .ok_or_else(|| Error::format("invalid property value"))?;
    let end = body
        .find(']')
        .ok_or_else(|| Error::format("invalid property value"))?;
    Ok(&body[..end])
}

crate::number_property! {
    /// Game type (`GM`): which game the record describes. Go is `1`;
    /// the registry runs to `40`.
    GM, "GM", 1..=40, "game type"
}

crate::number_property! {
    /// File format version (`FF`): the revision of the format the
    /// record was written against, `1` through `4`.
    FF, "FF", 1..=4, "file format"
}

crate::number_property! {
    /// Variation style (`ST`): how variations should be shown, `0`
    /// through `3`.
    ST, "ST", 0..=3, "style"
}

/// Charset (`CA`): the charset used to encode the record's text
/// values. Defaults to `ISO-8859-1` when absent.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{Property, CA};
///
/// let charset = CA::deserialize("CA[UTF-8]").unwrap();
/// assert_eq!(charset.charset().decoded(), "UTF-8");
/// assert_eq!(charset.serialize(), "CA[UTF-8]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CA {
    charset: SimpleText,
}

impl CA {
    /// Creates a charset property from a charset label.
    ///
    /// # Errors
    ///
    /// Fails if the label is rejected by the text codec.
    pub fn new(charset: impl Into<String>) -> Result<Self> {
        Ok(CA {
            charset: SimpleText::new(charset)?,
        })
    }

    /// The declared charset label.
    #[must_use]
    pub fn charset(&self) -> &SimpleText {
        &self.charset
    }
}

impl Property for CA {
    const IDENT: &'static str = "CA";

    fn values(&self) -> Vec<Value> {
        vec![Value::SimpleText(self.charset.clone())]
    }

    fn from_raw(raw: &str) -> Result<Self> {
        Self::new(raw)
    }
}

impl fmt::Display for CA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Rules (`RU`): the rule set the game was played under, as simple
/// text (`Japanese`, `AGA`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct RU {
    rules: SimpleText,
}

impl RU {
    /// Creates a rules property from raw text.
    pub fn new(rules: impl Into<String>) -> Result<Self> {
        Ok(RU {
            rules: SimpleText::new(rules)?,
        })
    }

    /// The declared rule set.
    #[must_use]
    pub fn rules(&self) -> &SimpleText {
        &self.rules
    }
}

impl Property for RU {
    const IDENT: &'static str = "RU";

    fn values(&self) -> Vec<Value> {
        vec![Value::SimpleText(self.rules.clone())]
    }

    fn from_raw(raw: &str) -> Result<Self> {
        Self::new(raw)
    }
}

impl fmt::Display for RU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Application (`AP`): the program that wrote the record, as a
/// composed `name:version` pair.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{Property, AP};
///
/// let app = AP::new("foo", "10.1").unwrap();
/// assert_eq!(app.serialize(), "AP[foo:10.1]");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AP {
    pair: Compose,
}

impl AP {
    /// Creates an application property from a name and a version.
    ///
    /// Both sides go through the text codec compose-aware, so a bare
    /// `:` in either must be escaped.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        Ok(AP {
            pair: Compose::new(SimpleText::new(name)?, SimpleText::new(version)?)?,
        })
    }

    /// The `name:version` pair.
    #[must_use]
    pub fn pair(&self) -> &Compose {
        &self.pair
    }

    /// The application name.
    #[must_use]
    pub fn name(&self) -> &Value {
        self.pair.left()
    }

    /// The application version.
    #[must_use]
    pub fn version(&self) -> &Value {
        self.pair.right()
    }
}

impl Property for AP {
    const IDENT: &'static str = "AP";

    fn values(&self) -> Vec<Value> {
        vec![Value::Compose(self.pair.clone())]
    }

    fn from_raw(raw: &str) -> Result<Self> {
        let (name, version) =
            split_raw(raw).ok_or_else(|| Error::format("invalid property value"))?;
        Self::new(name, version)
    }
}

impl fmt::Display for AP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Board size (`SZ`): a single number for square boards, or a
/// `columns:rows` pair for rectangular ones.
///
/// A pair whose two members are equal is rejected; square boards must
/// use the scalar form.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{Property, SZ};
///
/// assert_eq!(SZ::square(19).serialize(), "SZ[19]");
/// assert_eq!(SZ::rectangular(19, 18).unwrap().serialize(), "SZ[19:18]");
/// assert!(SZ::rectangular(19, 19).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SZ {
    size: Value,
}

impl SZ {
    /// Creates a board size from a number or a composed pair.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Validation`] for a pair with equal members
    /// or for any other value kind.
    pub fn new(size: impl Into<Value>) -> Result<Self> {
        match size.into() {
            Value::Number(n) => Ok(SZ {
                size: Value::Number(n),
            }),
            Value::Compose(pair) => {
                if pair.left().to_string() == pair.right().to_string() {
                    return Err(Error::validation(
                        "square boards must not be defined using the compose type",
                    ));
                }
                Ok(SZ {
                    size: Value::Compose(pair),
                })
            }
            other => Err(Error::validation(format!(
                "board size must be a number or a pair, got '{other}'"
            ))),
        }
    }

    /// Creates a square board size. Never fails.
    #[must_use]
    pub fn square(side: impl Into<Number>) -> Self {
        SZ {
            size: Value::Number(side.into()),
        }
    }

    /// Creates a rectangular board size from distinct column and row
    /// counts.
    pub fn rectangular(columns: impl Into<Number>, rows: impl Into<Number>) -> Result<Self> {
        let pair = Compose::new(columns.into(), rows.into())?;
        Self::new(pair)
    }

    /// The declared size, scalar or pair.
    #[must_use]
    pub fn size(&self) -> &Value {
        &self.size
    }
}

impl Property for SZ {
    const IDENT: &'static str = "SZ";

    fn values(&self) -> Vec<Value> {
        vec![self.size.clone()]
    }

    fn from_raw(raw: &str) -> Result<Self> {
        match split_raw(raw) {
            Some((columns, rows)) => {
                Self::rectangular(Number::from_text(columns)?, Number::from_text(rows)?)
            }
            None => Self::new(Number::from_text(raw)?),
        }
    }
}

impl fmt::Display for SZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
