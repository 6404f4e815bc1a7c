//! Conformance tests for the text codec against the FF[4] value
//! rules: escaping, soft/hard line breaks, whitespace normalization,
//! compose awareness, and charset encoding.

use sgf_codec::{Compose, Error, Number, SimpleText, Text, TextOptions};

#[test]
fn test_soft_break_removed() {
    // Backslash immediately followed by a line break: both vanish.
    let text = Text::new("a\\\nb").unwrap();
    assert_eq!(text.to_string(), "ab");

    let text = SimpleText::new("a\\\nb").unwrap();
    assert_eq!(text.to_string(), "ab");
}

#[test]
fn test_soft_break_multibyte_sequences() {
    // CRLF and LFCR are one break each, removed as a unit.
    assert_eq!(Text::new("a\\\r\nb").unwrap().to_string(), "ab");
    assert_eq!(Text::new("a\\\n\rb").unwrap().to_string(), "ab");
    assert_eq!(Text::new("a\\\rb").unwrap().to_string(), "ab");
}

#[test]
fn test_hard_break_preserved_in_formatted_text() {
    assert_eq!(Text::new("a\nb").unwrap().to_string(), "a\nb");
    // One CRLF is one break.
    assert_eq!(Text::new("a\r\nb").unwrap().to_string(), "a\nb");
    assert_eq!(Text::new("a\n\rb").unwrap().to_string(), "a\nb");
    // Two LFs are two breaks.
    assert_eq!(Text::new("a\n\nb").unwrap().to_string(), "a\n\nb");
}

#[test]
fn test_hard_break_spaced_in_simple_text() {
    assert_eq!(SimpleText::new("a\nb").unwrap().to_string(), "a b");
    assert_eq!(SimpleText::new("a\r\nb").unwrap().to_string(), "a b");
    assert_eq!(SimpleText::new("a\n\rb").unwrap().to_string(), "a b");
}

#[test]
fn test_whitespace_becomes_space() {
    assert_eq!(Text::new("a\tb").unwrap().to_string(), "a b");
    assert_eq!(SimpleText::new("a\tb").unwrap().to_string(), "a b");
    // Non-break Unicode whitespace too.
    assert_eq!(SimpleText::new("a\u{a0}b").unwrap().to_string(), "a b");
}

#[test]
fn test_escaped_whitespace_still_becomes_space() {
    // Escaping does not protect whitespace.
    assert_eq!(Text::new("a\\\tb").unwrap().to_string(), "a b");
    assert_eq!(SimpleText::new("a\\ b").unwrap().to_string(), "a b");
}

#[test]
fn test_unescaped_bracket_rejected() {
    assert!(matches!(Text::new("oops]"), Err(Error::Escape(_))));
    assert!(matches!(SimpleText::new("oops]"), Err(Error::Escape(_))));

    let err = SimpleText::new("oops]").unwrap_err();
    assert!(err.to_string().contains("']'"));
}

#[test]
fn test_dangling_escape_rejected() {
    assert!(matches!(Text::new("oops\\"), Err(Error::Escape(_))));
    assert!(matches!(SimpleText::new("oops\\"), Err(Error::Escape(_))));
}

#[test]
fn test_escaped_characters_kept_wire_ready() {
    let text = SimpleText::new(r"a\]b\\c").unwrap();
    assert_eq!(text.to_string(), r"a\]b\\c");
    assert_eq!(text.decoded(), r"a]b\c");

    // Escaping an ordinary character drops the backslash.
    let text = SimpleText::new(r"a\bc").unwrap();
    assert_eq!(text.to_string(), "abc");
}

#[test]
fn test_encode_is_idempotent_on_wire_form() {
    let once = SimpleText::new(r"a\]b \\ c").unwrap();
    let twice = SimpleText::new(once.to_string()).unwrap();
    assert_eq!(once.to_string(), twice.to_string());
}

#[test]
fn test_colon_plain_outside_compose() {
    let text = SimpleText::new("key:value").unwrap();
    assert_eq!(text.to_string(), "key:value");
}

#[test]
fn test_colon_rejected_in_compose_mode() {
    let options = TextOptions::new().with_compose();
    assert!(matches!(
        SimpleText::with_options("key:value", options),
        Err(Error::Escape(_))
    ));
}

#[test]
fn test_compose_rederives_elements() {
    // Fine on its own, rejected once composed.
    let left = SimpleText::new("key:value").unwrap();
    let right = SimpleText::new("x").unwrap();
    assert!(matches!(
        Compose::new(left, right),
        Err(Error::Escape(_))
    ));

    // With the colon escaped the pair is accepted, and the element
    // keeps the escape on the wire.
    let left = SimpleText::new(r"key\:value").unwrap();
    let right = SimpleText::new("x").unwrap();
    let pair = Compose::new(left, right).unwrap();
    assert_eq!(pair.to_string(), r"key\:value:x");
}

#[test]
fn test_compose_of_numbers() {
    let pair = Compose::new(Number::new(19), Number::new(18)).unwrap();
    assert_eq!(pair.to_string(), "19:18");
    assert_eq!(pair.left().to_string(), "19");
    assert_eq!(pair.right().to_string(), "18");
}

#[test]
fn test_compose_from_slice_arity() {
    let values = vec![19.into(), 18.into(), 17.into()];
    assert!(matches!(
        Compose::from_slice(&values),
        Err(Error::Validation(_))
    ));
    assert!(matches!(Compose::from_slice(&[]), Err(Error::Validation(_))));
    assert!(Compose::from_slice(&values[..2]).is_ok());
}

#[test]
fn test_compose_reuse_without_reescaping() {
    let pair = Compose::new(
        SimpleText::new(r"a\:b").unwrap(),
        SimpleText::new("c").unwrap(),
    )
    .unwrap();
    let reused = pair.clone();
    assert_eq!(reused, pair);
    assert_eq!(reused.to_string(), pair.to_string());
}

#[test]
fn test_nested_compose_rejected() {
    let inner = Compose::new(Number::new(1), Number::new(2)).unwrap();
    assert!(matches!(
        Compose::new(inner, Number::new(3)),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_latin1_byte_output() {
    let text = SimpleText::new("héllo").unwrap();
    assert_eq!(text.encoding(), "ISO-8859-1");
    assert_eq!(text.as_bytes(), &[0x68, 0xE9, 0x6C, 0x6C, 0x6F]);
}

#[test]
fn test_utf8_byte_output() {
    let text = SimpleText::with_encoding("héllo", "UTF-8").unwrap();
    assert_eq!(text.as_bytes(), "héllo".as_bytes());
}

#[test]
fn test_unknown_charset_label() {
    assert!(matches!(
        SimpleText::with_encoding("x", "no-such-charset"),
        Err(Error::Encoding(_))
    ));
}

#[test]
fn test_unrepresentable_character() {
    assert!(matches!(
        SimpleText::with_encoding("日本", "ISO-8859-1"),
        Err(Error::Encoding(_))
    ));
}

#[test]
fn test_exotic_line_boundaries() {
    // NEL, LINE SEPARATOR and friends count as line breaks, not plain
    // whitespace.
    assert_eq!(
        SimpleText::new("a\u{2028}b").unwrap().to_string(),
        "a b"
    );
    assert_eq!(Text::new("a\u{85}b").unwrap().to_string(), "a\nb");
    // Escaped, they are soft breaks.
    assert_eq!(Text::new("a\\\u{2029}b").unwrap().to_string(), "ab");
}

#[test]
fn test_empty_input() {
    let text = SimpleText::new("").unwrap();
    assert_eq!(text.to_string(), "");
    assert_eq!(text.as_bytes(), b"");
}
