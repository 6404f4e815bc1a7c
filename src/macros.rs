/// Declares a ranged numeric property: a struct wrapping a
/// [`Number`](crate::Number) whose value must lie in the given
/// inclusive range, with the full [`Property`](crate::Property)
/// contract implemented.
///
/// The root-property catalog declares `GM`, `FF`, and `ST` this way;
/// downstream crates can declare their own.
///
/// # Examples
///
/// ```rust
/// use sgf_codec::{number_property, Property};
///
/// number_property! {
///     /// Handicap stones.
///     HA, "HA", 2..=9, "handicap"
/// }
///
/// let handicap = HA::new(4).unwrap();
/// assert_eq!(handicap.serialize(), "HA[4]");
/// assert!(HA::new(1).is_err());
/// ```
#[macro_export]
macro_rules! number_property {
    ($(#[$meta:meta])* $name:ident, $ident:literal, $range:expr, $what:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            number: $crate::Number,
        }

        impl $name {
            /// Creates the property, rejecting an out-of-range number.
            pub fn new(number: impl Into<$crate::Number>) -> $crate::Result<Self> {
                let number = number.into();
                let range: std::ops::RangeInclusive<i64> = $range;
                if !range.contains(&number.value()) {
                    return Err($crate::Error::validation(format!(
                        concat!("unknown ", $what, " '{}'"),
                        number
                    )));
                }
                Ok(Self { number })
            }

            /// The wrapped number.
            #[must_use]
            pub fn number(&self) -> $crate::Number {
                self.number
            }
        }

        impl $crate::Property for $name {
            const IDENT: &'static str = $ident;

            fn values(&self) -> Vec<$crate::Value> {
                vec![$crate::Value::Number(self.number)]
            }

            fn from_raw(raw: &str) -> $crate::Result<Self> {
                Self::new($crate::Number::from_text(raw)?)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::Property::serialize(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{FF, GM, ST};

    #[test]
    fn test_catalog_ranges() {
        assert!(GM::new(1).is_ok());
        assert!(GM::new(40).is_ok());
        assert!(GM::new(0).is_err());
        assert!(GM::new(41).is_err());

        assert!(FF::new(4).is_ok());
        assert!(FF::new(5).is_err());

        assert!(ST::new(0).is_ok());
        assert!(ST::new(4).is_err());
    }

    #[test]
    fn test_validation_message_names_value() {
        let err = GM::new(41).unwrap_err();
        assert!(err.to_string().contains("unknown game type '41'"));

        let err = FF::new(0).unwrap_err();
        assert!(err.to_string().contains("unknown file format '0'"));

        let err = ST::new(-1).unwrap_err();
        assert!(err.to_string().contains("unknown style '-1'"));
    }

    #[test]
    fn test_display_is_wire_form() {
        assert_eq!(GM::new(30).unwrap().to_string(), "GM[30]");
        assert_eq!(ST::new(2).unwrap().to_string(), "ST[2]");
    }
}
