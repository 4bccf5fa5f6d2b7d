//! Enumerated string values.

/// A closed set of KML keyword values.
///
/// Decoding never fails: unknown keywords map to the default, which is
/// always the first declared case.
pub trait KmlToken: Sized + Copy + Default + PartialEq {
    /// Decode a keyword, falling back to the default case.
    fn from_token(token: &str) -> Self;

    /// Keyword as written in KML.
    fn as_token(&self) -> &'static str;

    /// Whether this is the case the serializer may omit.
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Declare a keyword enum with its KML spellings.
///
/// The first case is the default.
macro_rules! kml_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $first:ident => $first_token:literal
            $(, $variant:ident => $token:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $first,
            $($variant),*
        }

        impl $crate::scalar::KmlToken for $name {
            fn from_token(token: &str) -> Self {
                match token.trim() {
                    $($token => Self::$variant,)*
                    _ => Self::$first,
                }
            }

            fn as_token(&self) -> &'static str {
                match self {
                    Self::$first => $first_token,
                    $(Self::$variant => $token),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::scalar::KmlToken::as_token(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::scalar::KmlToken::as_token(self))
            }
        }
    };
}

pub(crate) use kml_enum;

#[cfg(test)]
mod tests {
    use super::*;

    kml_enum! {
        pub enum Flavour {
            Plain => "plain",
            Salted => "salted",
        }
    }

    #[test]
    fn test_decode_known_tokens() {
        assert_eq!(Flavour::from_token("salted"), Flavour::Salted);
        assert_eq!(Flavour::from_token(" plain "), Flavour::Plain);
    }

    #[test]
    fn test_unknown_token_falls_back_to_first_case() {
        assert_eq!(Flavour::from_token("sweet"), Flavour::Plain);
        assert_eq!(Flavour::from_token(""), Flavour::Plain);
        assert!(Flavour::from_token("sweet").is_default());
    }

    #[test]
    fn test_encode() {
        assert_eq!(Flavour::Salted.as_token(), "salted");
        assert_eq!(Flavour::Plain.to_string(), "plain");
    }
}
