//! Tests for declaring new ranged numeric properties with the
//! `number_property!` macro, the way the built-in catalog does.

use sgf_codec::{number_property, Error, Property};

number_property! {
    /// Handicap stones.
    HA, "HA", 2..=9, "handicap"
}

number_property! {
    /// Score offset, allowing negative values.
    XO, "XO", -5..=5, "offset"
}

#[test]
fn test_declared_property_construction() {
    let handicap = HA::new(4).unwrap();
    assert_eq!(handicap.number().value(), 4);
    assert_eq!(HA::IDENT, "HA");
}

#[test]
fn test_declared_property_range() {
    assert!(HA::new(2).is_ok());
    assert!(HA::new(9).is_ok());
    assert!(matches!(HA::new(1), Err(Error::Validation(_))));
    assert!(matches!(HA::new(10), Err(Error::Validation(_))));

    let err = HA::new(10).unwrap_err();
    assert!(err.to_string().contains("unknown handicap '10'"));
}

#[test]
fn test_declared_property_serialize() {
    let handicap = HA::new(5).unwrap();
    assert_eq!(handicap.serialize(), "HA[5]");
    assert_eq!(handicap.to_string(), "HA[5]");
}

#[test]
fn test_declared_property_deserialize() {
    let handicap = HA::deserialize(" HA [7] ").unwrap();
    assert_eq!(handicap.number().value(), 7);

    assert!(HA::deserialize("HA[1]").is_err());
    assert!(HA::deserialize("GM[5]").is_err());
}

#[test]
fn test_negative_range() {
    let offset = XO::new(-5).unwrap();
    assert_eq!(offset.serialize(), "XO[-5]");

    let offset = XO::deserialize("XO[-3]").unwrap();
    assert_eq!(offset.number().value(), -3);

    assert!(XO::new(-6).is_err());
}
