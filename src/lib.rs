//! # sgf_codec
//!
//! A typed value and property codec for the SGF (Smart Game Format)
//! game-record format.
//!
//! ## What is SGF?
//!
//! SGF is a line-oriented, bracket-delimited text format for recording
//! games such as Go: a record is a tree of nodes, each node holding
//! named properties, each property holding one or more bracketed
//! values (`GM[1]`, `SZ[19:18]`, `C[a comment]`). This crate
//! implements the value and property layer of that format: the
//! character-level escaping and whitespace rules, the charset step,
//! and the generic serialize/deserialize contract every typed property
//! satisfies. The document-level grammar (nodes, trees, collections)
//! is left to the consumer.
//!
//! ## Key Features
//!
//! - **Faithful text codec**: soft/hard line-break handling, escape
//!   processing, and whitespace normalization in a single pass
//! - **Typed properties**: each property is a real type; invalid
//!   values are unrepresentable after construction
//! - **Composed values**: `left:right` pairs with compose-aware
//!   re-escaping of their elements
//! - **Charset aware**: values encode into any named charset
//!   (default `ISO-8859-1`) via `encoding_rs`
//! - **Declarative catalog**: ranged numeric properties are one
//!   [`number_property!`] invocation
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sgf_codec = "0.1"
//! ```
//!
//! ### Serializing and Deserializing Properties
//!
//! ```rust
//! use sgf_codec::{Property, GM, SZ};
//!
//! // Typed construction validates up front.
//! let game = GM::new(1).unwrap();
//! assert_eq!(game.serialize(), "GM[1]");
//!
//! // Deserialization tolerates surrounding whitespace.
//! let game = GM::deserialize(" GM[30]").unwrap();
//! assert_eq!(game.number().value(), 30);
//!
//! // Out-of-range values are hard failures.
//! assert!(GM::new(41).is_err());
//!
//! // Board sizes: scalar for square, compose for rectangular.
//! assert_eq!(SZ::square(19).serialize(), "SZ[19]");
//! assert_eq!(SZ::rectangular(19, 18).unwrap().serialize(), "SZ[19:18]");
//! ```
//!
//! ### Working with Text Values
//!
//! ```rust
//! use sgf_codec::{SimpleText, Text};
//!
//! // Formatted text keeps hard line breaks.
//! let comment = Text::new("first line\nsecond line").unwrap();
//! assert_eq!(comment.to_string(), "first line\nsecond line");
//!
//! // Simple text never keeps a line break.
//! let label = SimpleText::new("first line\nsecond line").unwrap();
//! assert_eq!(label.to_string(), "first line second line");
//!
//! // A backslash-escaped line break is removed entirely.
//! let joined = Text::new("a\\\nb").unwrap();
//! assert_eq!(joined.to_string(), "ab");
//! ```
//!
//! ### Declaring Your Own Properties
//!
//! ```rust
//! use sgf_codec::{number_property, Property};
//!
//! number_property! {
//!     /// Handicap stones.
//!     HA, "HA", 2..=9, "handicap"
//! }
//!
//! let handicap = HA::deserialize("HA[5]").unwrap();
//! assert_eq!(handicap.number().value(), 5);
//! ```
//!
//! ## Error Handling
//!
//! Every failure is one of four categories ([`Error::Format`],
//! [`Error::Escape`], [`Error::Encoding`], [`Error::Validation`]),
//! raised synchronously at construction or deserialization. There is
//! no partial-success state: either a fully valid typed value is
//! produced, or none is.
//!
//! ## Performance Characteristics
//!
//! - **Encoding**: O(n) single pass over the input characters
//! - **Deserialization**: O(n) with no backtracking
//! - **Concurrency**: every type is immutable after construction and
//!   freely shareable across threads
//!
//! ## Format Specification
//!
//! The SGF value/property syntax implemented here is documented in
//! the [`spec`] module; the full FF[4] specification lives at
//! <https://www.red-bean.com/sgf/>.

pub mod compose;
pub mod error;
pub mod macros;
pub mod options;
pub mod property;
pub mod spec;
pub mod text;
pub mod value;

pub use compose::Compose;
pub use error::{Error, Result};
pub use options::{TextOptions, DEFAULT_ENCODING};
pub use property::{Property, AP, CA, FF, GM, RU, ST, SZ};
pub use text::{SimpleText, Text};
pub use value::{Number, Value};

/// Serializes any property to its wire form.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{serialize, FF};
///
/// let version = FF::new(4).unwrap();
/// assert_eq!(serialize(&version), "FF[4]");
/// ```
#[must_use]
pub fn serialize<P: Property>(property: &P) -> String {
    property.serialize()
}

/// Deserializes a property from wire text.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{deserialize, CA};
///
/// let charset: CA = deserialize("CA[UTF-8]").unwrap();
/// assert_eq!(charset.charset().decoded(), "UTF-8");
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a wire-valid instance of `P`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn deserialize<P: Property>(data: &str) -> Result<P> {
    P::deserialize(data)
}
