//! Error types for SGF value encoding and property deserialization.
//!
//! Every failure the codec can produce falls into one of four
//! categories, raised synchronously at the point of construction or
//! deserialization. Nothing is retried and nothing is logged here; the
//! caller decides whether to recover, skip the property, or abort the
//! surrounding document parse.
//!
//! ## Error Categories
//!
//! - **Format**: malformed wire syntax (missing identifier, missing
//!   bracket, bad integer literal)
//! - **Escape**: an unescaped must-escape character, or a dangling
//!   trailing escape
//! - **Encoding**: unknown charset label, or a character that the
//!   declared charset cannot represent
//! - **Validation**: the value parses but violates a domain constraint
//!   (out-of-range enumeration, square board given as a pair)
//!
//! ## Examples
//!
//! ```rust
//! use sgf_codec::{Error, Property, GM};
//!
//! let result = GM::deserialize("GM[99]");
//! assert!(matches!(result, Err(Error::Validation(_))));
//!
//! if let Err(err) = GM::deserialize("GM[99]") {
//!     eprintln!("rejected: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the SGF value codec and
/// property protocol.
///
/// The message carried by each variant names the offending character or
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed wire syntax
    #[error("format error: {0}")]
    Format(String),

    /// Unescaped must-escape character or dangling trailing escape
    #[error("escape error: {0}")]
    Escape(String),

    /// Unknown charset label, or character unrepresentable in the
    /// declared charset
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Value parses but violates a domain range or shape constraint
    #[error("validation error: {0}")]
    Validation(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a format error for malformed wire syntax.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::Error;
    ///
    /// let err = Error::format("missing identifier 'GM'");
    /// assert!(err.to_string().contains("missing identifier"));
    /// ```
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    /// Creates an escape error for an unescaped must-escape character
    /// or a dangling trailing escape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::Error;
    ///
    /// let err = Error::escape("unescaped use of ']'");
    /// assert!(err.to_string().contains("']'"));
    /// ```
    pub fn escape(msg: impl Into<String>) -> Self {
        Error::Escape(msg.into())
    }

    /// Creates an encoding error for charset failures.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Error::Encoding(msg.into())
    }

    /// Creates a validation error for a value that parses but violates
    /// a domain constraint. The offending value belongs in the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::Error;
    ///
    /// let err = Error::validation("unknown game type '41'");
    /// assert!(err.to_string().contains("'41'"));
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
