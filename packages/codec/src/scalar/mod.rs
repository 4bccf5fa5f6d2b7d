//! Scalar coercion: text content and attribute values to typed values.
//!
//! All decoders are total. A value that cannot be read falls back to a
//! documented zero value instead of failing the parse.

mod color;
mod coordinates;
mod datetime;
mod token;

pub use color::Color;
pub use coordinates::{
    format_coordinates, format_track_coord, parse_coordinates, parse_track_coord, Coordinate,
};
pub use datetime::{span_between, KmlDateTime};
pub(crate) use token::kml_enum;
pub use token::KmlToken;

/// How a scalar leaf's text is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Double,
    Int,
    Text,
    /// Keyword, decoded by the receiving field into its enum.
    Token,
    Color,
    DateTime,
    Coordinates,
    /// A single `gx:coord` tuple.
    TrackCoord,
}

/// A decoded scalar, ready to be set on its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    Double(Option<f64>),
    Int(Option<i64>),
    Text(String),
    Token(String),
    Color(Color),
    DateTime(Option<KmlDateTime>),
    Coordinates(Vec<Coordinate>),
}

/// Decode trimmed text as the given kind.
#[must_use]
pub fn coerce(kind: ScalarKind, text: &str) -> ScalarValue {
    let text = text.trim();
    match kind {
        ScalarKind::Bool => ScalarValue::Bool(parse_bool(text)),
        ScalarKind::Double => ScalarValue::Double(parse_f64(text)),
        ScalarKind::Int => ScalarValue::Int(parse_i64(text)),
        ScalarKind::Text => ScalarValue::Text(text.to_string()),
        ScalarKind::Token => ScalarValue::Token(text.to_string()),
        ScalarKind::Color => ScalarValue::Color(Color::parse(text)),
        ScalarKind::DateTime => {
            let value = KmlDateTime::parse(text);
            if value.is_none() && !text.is_empty() {
                tracing::warn!(value = %text, "Unrecognized date/time, leaving it unset");
            }
            ScalarValue::DateTime(value)
        }
        ScalarKind::Coordinates => ScalarValue::Coordinates(parse_coordinates(text)),
        ScalarKind::TrackCoord => ScalarValue::Coordinates(vec![parse_track_coord(text)]),
    }
}

/// `"1"` or `"true"` (any case) is true; everything else is false.
#[must_use]
pub fn parse_bool(text: &str) -> bool {
    let text = text.trim();
    text == "1" || text.eq_ignore_ascii_case("true")
}

/// Decode a finite float, `None` when unreadable.
///
/// `NaN` and the infinities are rejected so they fall back like any other
/// malformed number.
#[must_use]
pub fn parse_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode an integer, accepting a whole-valued float such as `"256.0"`.
#[must_use]
pub fn parse_i64(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse().ok().or_else(|| {
        parse_f64(text)
            .filter(|v| v.fract() == 0.0 && v.is_finite())
            .map(|v| v as i64)
    })
}

/// Encoding style of a boolean field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolStyle {
    /// `1` / `0`
    Numeric,
    /// `true` / `false`
    Textual,
}

/// Encode a boolean in the field's style.
#[must_use]
pub fn format_bool(value: bool, style: BoolStyle) -> &'static str {
    match (style, value) {
        (BoolStyle::Numeric, true) => "1",
        (BoolStyle::Numeric, false) => "0",
        (BoolStyle::Textual, true) => "true",
        (BoolStyle::Textual, false) => "false",
    }
}

impl ScalarValue {
    /// Text payload; empty for non-text kinds.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) | Self::Token(text) => text.clone(),
            _ => String::new(),
        }
    }

    #[must_use]
    pub fn flag(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) | Self::Token(text) => parse_bool(text),
            _ => false,
        }
    }

    /// Float payload, or the field's fallback.
    #[must_use]
    pub fn f64_or(&self, fallback: f64) -> f64 {
        match self {
            Self::Double(Some(value)) => *value,
            Self::Int(Some(value)) => *value as f64,
            _ => fallback,
        }
    }

    /// Integer payload, or the field's fallback.
    #[must_use]
    pub fn i32_or(&self, fallback: i32) -> i32 {
        match self {
            Self::Int(Some(value)) => i32::try_from(*value).unwrap_or(fallback),
            _ => fallback,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Color(color) => *color,
            _ => Color::WHITE,
        }
    }

    #[must_use]
    pub fn datetime(&self) -> Option<KmlDateTime> {
        match self {
            Self::DateTime(value) => *value,
            _ => None,
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        match self {
            Self::Coordinates(coordinates) => coordinates.clone(),
            _ => Vec::new(),
        }
    }

    /// Keyword payload decoded into its enum.
    #[must_use]
    pub fn token<T: KmlToken>(&self) -> T {
        match self {
            Self::Token(text) | Self::Text(text) => T::from_token(text),
            _ => T::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool(" True "));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_format_bool_styles() {
        assert_eq!(format_bool(true, BoolStyle::Numeric), "1");
        assert_eq!(format_bool(false, BoolStyle::Numeric), "0");
        assert_eq!(format_bool(true, BoolStyle::Textual), "true");
        assert_eq!(format_bool(false, BoolStyle::Textual), "false");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_f64(" 4.5 "), Some(4.5));
        assert_eq!(parse_f64("four"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("-inf"), None);
        assert_eq!(parse_f64("1e999"), None);
        assert_eq!(parse_i64("256"), Some(256));
        assert_eq!(parse_i64("256.0"), Some(256));
        assert_eq!(parse_i64("2.5"), None);
    }

    #[test]
    fn test_coerce_double_with_fallback() {
        assert_eq!(coerce(ScalarKind::Double, "x").f64_or(4.0), 4.0);
        assert_eq!(coerce(ScalarKind::Double, "2").f64_or(4.0), 2.0);
        assert_eq!(coerce(ScalarKind::Int, "x").i32_or(256), 256);
    }

    #[test]
    fn test_coerce_trims_text() {
        assert_eq!(
            coerce(ScalarKind::Text, "\n  My Place \n"),
            ScalarValue::Text("My Place".to_string())
        );
    }

    #[test]
    fn test_coerce_invalid_date_is_absent() {
        assert_eq!(
            coerce(ScalarKind::DateTime, "soon"),
            ScalarValue::DateTime(None)
        );
    }

    #[test]
    fn test_coerce_track_coord() {
        let value = coerce(ScalarKind::TrackCoord, "1 2 3");
        assert_eq!(
            value.coordinates(),
            vec![Coordinate::with_altitude(1.0, 2.0, 3.0)]
        );
    }
}
