//! Configuration options for SGF text encoding.
//!
//! This module provides [`TextOptions`], which controls the two knobs
//! the text codec exposes:
//!
//! - the charset label the processed text is encoded into (the value
//!   of the surrounding record's `CA` property; default `ISO-8859-1`)
//! - compose mode, which adds `:` to the must-escape set for values
//!   that sit inside a composed pair
//!
//! ## Examples
//!
//! ```rust
//! use sgf_codec::{SimpleText, TextOptions};
//!
//! let options = TextOptions::new().with_encoding("UTF-8");
//! let text = SimpleText::with_options("héllo", options).unwrap();
//! assert_eq!(text.encoding(), "UTF-8");
//!
//! // In compose mode a bare ':' is an error.
//! let options = TextOptions::new().with_compose();
//! assert!(SimpleText::with_options("a:b", options).is_err());
//! ```

/// The default charset label, per the format's `CA` property default.
pub const DEFAULT_ENCODING: &str = "ISO-8859-1";

/// Options for encoding an SGF text value.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::TextOptions;
///
/// // Defaults: ISO-8859-1, compose off
/// let options = TextOptions::new();
///
/// // Custom configuration
/// let options = TextOptions::new()
///     .with_encoding("UTF-8")
///     .with_compose();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextOptions {
    /// Charset label to encode into, resolved by name.
    pub encoding: String,
    /// Whether `:` joins the must-escape set (true inside composed
    /// values).
    pub compose: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            encoding: DEFAULT_ENCODING.to_string(),
            compose: false,
        }
    }
}

impl TextOptions {
    /// Creates default options (`ISO-8859-1`, compose off).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::TextOptions;
    ///
    /// let options = TextOptions::new();
    /// assert_eq!(options.encoding, "ISO-8859-1");
    /// assert!(!options.compose);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the charset label to encode into.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::TextOptions;
    ///
    /// let options = TextOptions::new().with_encoding("UTF-8");
    /// assert_eq!(options.encoding, "UTF-8");
    /// ```
    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Turns on compose mode: `:` must then be escaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_codec::TextOptions;
    ///
    /// let options = TextOptions::new().with_compose();
    /// assert!(options.compose);
    /// ```
    #[must_use]
    pub fn with_compose(mut self) -> Self {
        self.compose = true;
        self
    }
}
