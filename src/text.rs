//! The SGF text codec: escape processing, whitespace normalization,
//! and charset encoding for the format's two textual value kinds.
//!
//! ## Overview
//!
//! SGF stores text inside brackets, so `]` and the escape character
//! `\` must be backslash-escaped (plus `:` inside composed values).
//! A line break preceded by `\` is a *soft* break and is removed; any
//! other line break is a *hard* break. The two value kinds differ only
//! in what happens to hard breaks:
//!
//! - [`Text`] (formatted text) preserves hard breaks as literal line
//!   breaks
//! - [`SimpleText`] converts hard breaks to a single space, so no line
//!   break ever survives
//!
//! All other whitespace becomes a single space in both kinds.
//!
//! ## Usage
//!
//! ```rust
//! use sgf_codec::{SimpleText, Text};
//!
//! // Hard breaks survive in formatted text...
//! let formatted = Text::new("line one\nline two").unwrap();
//! assert_eq!(formatted.to_string(), "line one\nline two");
//!
//! // ...and collapse to a space in simple text.
//! let simple = SimpleText::new("line one\nline two").unwrap();
//! assert_eq!(simple.to_string(), "line one line two");
//!
//! // A backslash-escaped break is a soft break and disappears.
//! let soft = Text::new("a\\\nb").unwrap();
//! assert_eq!(soft.to_string(), "ab");
//! ```
//!
//! ## Stored form
//!
//! Both types store the *wire-ready* character form: must-escape
//! characters keep their backslash, so the stored text can be emitted
//! between `[` and `]` verbatim. Use [`Text::decoded`] /
//! [`SimpleText::decoded`] for the display form with escapes removed.

use crate::error::{Error, Result};
use crate::options::TextOptions;
use encoding_rs::Encoding;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Escape-processing mode: what happens to hard line breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Hard line breaks are preserved as literal breaks.
    Formatted,
    /// Hard line breaks become a single space.
    Simple,
}

/// State of the escape processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    Escaped,
}

/// Returns `true` if `c` is a Unicode line boundary character.
///
/// This is the full line-boundary set (LF, CR, VT, FF, FS, GS, RS,
/// NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR), not just `\n`/`\r`, so
/// locale-specific break characters are not missed.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// The single whitespace predicate used by the codec.
///
/// FS/GS/RS are line boundaries but not Unicode `White_Space`, so
/// `char::is_whitespace` alone would miss them.
fn is_space(c: char) -> bool {
    is_line_break(c) || c.is_whitespace()
}

/// Consumes the second half of a CRLF or LFCR pair, so that either
/// sequence counts as exactly one line break.
fn fold_break(c: char, chars: &mut Peekable<Chars<'_>>) {
    if (c == '\r' && chars.peek() == Some(&'\n')) || (c == '\n' && chars.peek() == Some(&'\r')) {
        chars.next();
    }
}

/// Runs escape processing and whitespace normalization over `raw` in a
/// single left-to-right pass.
///
/// The result is the wire-ready character form: soft breaks removed,
/// hard breaks preserved (`Formatted`) or spaced (`Simple`), other
/// whitespace collapsed to single spaces, and must-escape characters
/// still carrying their backslash.
pub(crate) fn escape_text(raw: &str, mode: Mode, compose: bool) -> Result<String> {
    let mut state = State::Normal;
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => {
                if c == '\\' {
                    state = State::Escaped;
                } else if c == ']' || (compose && c == ':') {
                    return Err(Error::escape(format!("unescaped use of '{c}'")));
                } else if is_line_break(c) {
                    fold_break(c, &mut chars);
                    match mode {
                        Mode::Formatted => out.push('\n'),
                        Mode::Simple => out.push(' '),
                    }
                } else if is_space(c) {
                    out.push(' ');
                } else {
                    out.push(c);
                }
            }
            State::Escaped => {
                state = State::Normal;
                if is_line_break(c) {
                    // Soft break: removed entirely.
                    fold_break(c, &mut chars);
                } else if is_space(c) {
                    // Escaping does not protect whitespace.
                    out.push(' ');
                } else {
                    if c == '\\' || c == ']' || (compose && c == ':') {
                        out.push('\\');
                    }
                    out.push(c);
                }
            }
        }
    }

    if state == State::Escaped {
        return Err(Error::escape("dangling escape"));
    }

    Ok(out)
}

/// Encodes `text` into the charset named by `label`.
fn encode_charset(text: &str, label: &str) -> Result<Vec<u8>> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::encoding(format!("unknown charset label '{label}'")))?;
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(Error::encoding(format!(
            "text not representable in charset '{}'",
            encoding.name()
        )));
    }
    Ok(bytes.into_owned())
}

fn process(raw: &str, mode: Mode, options: &TextOptions) -> Result<(String, Vec<u8>)> {
    let text = escape_text(raw, mode, options.compose)?;
    let data = encode_charset(&text, &options.encoding)?;
    Ok((text, data))
}

fn strip_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Formatted SGF text: hard line breaks are preserved.
///
/// Constructing a `Text` runs the escape/whitespace state machine over
/// the raw input, then encodes the result into the declared charset
/// (default `ISO-8859-1`). The value is immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::Text;
///
/// let text = Text::new("one\ntwo\tthree").unwrap();
/// assert_eq!(text.to_string(), "one\ntwo three");
///
/// // ']' must be escaped inside a bracketed value.
/// assert!(Text::new("oops]").is_err());
/// let ok = Text::new(r"fine\]").unwrap();
/// assert_eq!(ok.decoded(), "fine]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    raw: String,
    text: String,
    data: Vec<u8>,
    encoding: String,
}

impl Text {
    /// Creates formatted text from raw input using the default
    /// options (`ISO-8859-1`, compose off).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Escape`] on an unescaped `]` or a dangling
    /// trailing `\`, and with [`Error::Encoding`] if a character is
    /// unrepresentable in the charset.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        Self::with_options(raw, TextOptions::default())
    }

    /// Creates formatted text encoded into the named charset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::Text;
    ///
    /// let text = Text::with_encoding("héllo", "ISO-8859-1").unwrap();
    /// assert_eq!(text.as_bytes(), &[0x68, 0xE9, 0x6C, 0x6C, 0x6F]);
    /// ```
    pub fn with_encoding(raw: impl Into<String>, encoding: impl Into<String>) -> Result<Self> {
        Self::with_options(raw, TextOptions::new().with_encoding(encoding))
    }

    /// Creates formatted text with explicit [`TextOptions`].
    pub fn with_options(raw: impl Into<String>, options: TextOptions) -> Result<Self> {
        let raw = raw.into();
        let (text, data) = process(&raw, Mode::Formatted, &options)?;
        Ok(Text {
            raw,
            text,
            data,
            encoding: options.encoding,
        })
    }

    /// The charset-encoded byte form of this text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The charset label this text was encoded with.
    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// The display form: escape backslashes removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::Text;
    ///
    /// let text = Text::new(r"a\]b").unwrap();
    /// assert_eq!(text.to_string(), r"a\]b");
    /// assert_eq!(text.decoded(), "a]b");
    /// ```
    #[must_use]
    pub fn decoded(&self) -> String {
        strip_escapes(&self.text)
    }

    /// Re-derives this text from its original raw input with compose
    /// mode on, so a bare `:` inside it becomes an error.
    pub(crate) fn recompose(&self) -> Result<Self> {
        Self::with_options(
            self.raw.clone(),
            TextOptions::new()
                .with_encoding(self.encoding.clone())
                .with_compose(),
        )
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Text {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.decoded())
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Text::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Simple SGF text: no line break ever survives.
///
/// Identical to [`Text`] except that hard line breaks become a single
/// space, so the result is always a single line.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::SimpleText;
///
/// let text = SimpleText::new("a\r\nb").unwrap();
/// assert_eq!(text.to_string(), "a b");
///
/// // Soft breaks are removed, exactly as in formatted text.
/// let soft = SimpleText::new("a\\\r\nb").unwrap();
/// assert_eq!(soft.to_string(), "ab");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleText {
    raw: String,
    text: String,
    data: Vec<u8>,
    encoding: String,
}

impl SimpleText {
    /// Creates simple text from raw input using the default options
    /// (`ISO-8859-1`, compose off).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Escape`] on an unescaped `]` or a dangling
    /// trailing `\`, and with [`Error::Encoding`] if a character is
    /// unrepresentable in the charset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::SimpleText;
    ///
    /// let charset = SimpleText::new("UTF-8").unwrap();
    /// assert_eq!(charset.as_bytes(), b"UTF-8");
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        Self::with_options(raw, TextOptions::default())
    }

    /// Creates simple text encoded into the named charset.
    pub fn with_encoding(raw: impl Into<String>, encoding: impl Into<String>) -> Result<Self> {
        Self::with_options(raw, TextOptions::new().with_encoding(encoding))
    }

    /// Creates simple text with explicit [`TextOptions`].
    pub fn with_options(raw: impl Into<String>, options: TextOptions) -> Result<Self> {
        let raw = raw.into();
        let (text, data) = process(&raw, Mode::Simple, &options)?;
        Ok(SimpleText {
            raw,
            text,
            data,
            encoding: options.encoding,
        })
    }

    /// The charset-encoded byte form of this text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The charset label this text was encoded with.
    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// The display form: escape backslashes removed.
    #[must_use]
    pub fn decoded(&self) -> String {
        strip_escapes(&self.text)
    }

    /// Re-derives this text from its original raw input with compose
    /// mode on, so a bare `:` inside it becomes an error.
    pub(crate) fn recompose(&self) -> Result<Self> {
        Self::with_options(
            self.raw.clone(),
            TextOptions::new()
                .with_encoding(self.encoding.clone())
                .with_compose(),
        )
    }
}

impl fmt::Display for SimpleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for SimpleText {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.decoded())
    }
}

impl<'de> Deserialize<'de> for SimpleText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SimpleText::new(raw).map_err(serde::de::Error::custom)
    }
}
