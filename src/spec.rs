//! SGF Value and Property Syntax
//!
//! This module documents the slice of the SGF (Smart Game Format)
//! specification implemented by this library: the property wire
//! syntax and the value types, including their escaping and
//! whitespace rules.
//!
//! # Overview
//!
//! An SGF record is a tree of nodes, each node holding named
//! properties, each property holding one or more bracketed values.
//! This crate implements the value and property layer; the
//! document-level grammar (nodes, game trees, collections) sits on
//! top of it.
//!
//! # Property Syntax
//!
//! ```text
//! Property  := Ident Value+
//! Ident     := UcLetter+
//! Value     := "[" ValueText "]"
//! ```
//!
//! The identifier is uppercase with no internal whitespace, and the
//! bracketed values follow it with no separator:
//!
//! ```text
//! GM[1]
//! SZ[19]
//! AB[ab][cd][ef]
//! ```
//!
//! Whitespace before the identifier and between the identifier and
//! the first bracket must be tolerated when reading (`"\tFF [3] "` is
//! a valid `FF` property) and is never emitted when writing.
//!
//! # Value Types
//!
//! ## Number
//!
//! A signed decimal integer, `[+-]?digits`. The canonical written
//! form has no leading `+` and no redundant zeros.
//!
//! ## Text
//!
//! Text is formatted text. Whitespace other than line breaks is
//! converted to space (no tab, no vertical tab).
//!
//! Formatting:
//! - **Soft line break**: a line break preceded by `\`; removed
//!   entirely.
//! - **Hard line break**: any other line break; preserved.
//!
//! A single line break is represented differently on different
//! systems (`LF` on Unix, `CRLF` on Windows, historically `LFCR`);
//! `LF`, `CR`, `CRLF`, and `LFCR` each count as exactly one break.
//!
//! ## SimpleText
//!
//! SimpleText is a simple string: whitespace other than space is
//! converted to space, so there is no newline. Soft line breaks are
//! removed as in Text; all other line breaks are converted to space.
//!
//! ## Compose
//!
//! Two values joined by `:`:
//!
//! ```text
//! SZ[19:18]
//! AP[CGoban:1.6.2]
//! ```
//!
//! # Escaping
//!
//! `\` is the escape character. Any character following `\` is taken
//! verbatim, with one exception: whitespace still has to be converted
//! to space. The following characters have to be escaped when used in
//! a value:
//!
//! - `]`, which closes the value
//! - `\`, the escape character itself
//! - `:`, only inside a composed value
//!
//! An unescaped occurrence of a must-escape character is an error, as
//! is a trailing `\` with nothing after it.
//!
//! # Charsets
//!
//! Text values can be encoded in different charsets, declared by the
//! record's `CA` property. The default is `ISO-8859-1`. This crate
//! resolves charset labels by name and fails if a character is not
//! representable in the declared charset.
//!
//! # Root Properties Implemented Here
//!
//! | ident | value | constraint |
//! |-------|-------|------------|
//! | `GM`  | number | game type, `1..=40` |
//! | `FF`  | number | file format version, `1..=4` |
//! | `ST`  | number | variation style, `0..=3` |
//! | `CA`  | simple text | charset label |
//! | `RU`  | simple text | rule set |
//! | `AP`  | compose | application `name:version` |
//! | `SZ`  | number or compose | board size; a pair with equal members is invalid (square boards use the scalar form) |
//!
//! # Conformance
//!
//! This implementation follows the FF[4] specification:
//! <https://www.red-bean.com/sgf/>

// This module contains only documentation; no implementation code
