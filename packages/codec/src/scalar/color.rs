//! Hex color literals.

use std::fmt;

use serde::{Serialize, Serializer};

/// An 8-bit-per-channel color with alpha.
///
/// The canonical text form is eight lowercase hex digits in
/// alpha, red, green, blue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Opaque white, the fallback for unreadable literals.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff, 0xff);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0xff, 0x00, 0x00, 0x00);

    #[must_use]
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Decode a hex literal.
    ///
    /// Accepts 8 digits (alpha first), 6 digits or 3 digits (opaque), with an
    /// optional leading `#`. Anything else decodes to opaque white.
    ///
    /// # Examples
    /// ```
    /// use kml_codec::scalar::Color;
    ///
    /// let color = Color::parse("ffa8ff00");
    /// assert_eq!((color.alpha, color.red, color.green, color.blue), (0xff, 0xa8, 0xff, 0x00));
    /// assert_eq!(Color::parse("#f00"), Color::new(0xff, 0xff, 0x00, 0x00));
    /// assert_eq!(Color::parse("nonsense"), Color::WHITE);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::WHITE;
        }

        match digits.len() {
            8 => match u32::from_str_radix(digits, 16) {
                Ok(value) => {
                    let [alpha, red, green, blue] = value.to_be_bytes();
                    Self::new(alpha, red, green, blue)
                }
                Err(_) => Self::WHITE,
            },
            6 => match u32::from_str_radix(digits, 16) {
                Ok(value) => {
                    let [_, red, green, blue] = value.to_be_bytes();
                    Self::new(0xff, red, green, blue)
                }
                Err(_) => Self::WHITE,
            },
            3 => {
                let mut channels = digits.chars().filter_map(|c| c.to_digit(16));
                match (channels.next(), channels.next(), channels.next()) {
                    // Each short digit d expands to dd, i.e. d * 17.
                    (Some(r), Some(g), Some(b)) => {
                        Self::new(0xff, (r * 17) as u8, (g * 17) as u8, (b * 17) as u8)
                    }
                    _ => Self::WHITE,
                }
            }
            _ => Self::WHITE,
        }
    }

    /// Canonical 8-digit lowercase form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}{:02x}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_roundtrip() {
        let color = Color::parse("ffa8ff00");
        assert_eq!(color.alpha, 0xff);
        assert_eq!(color.red, 0xa8);
        assert_eq!(color.green, 0xff);
        assert_eq!(color.blue, 0x00);
        assert_eq!(color.to_hex(), "ffa8ff00");
    }

    #[test]
    fn test_channel_positions() {
        let color = Color::parse("78563412");
        assert_eq!(color, Color::new(0x78, 0x56, 0x34, 0x12));
        assert_eq!(color.to_string(), "78563412");
    }

    #[test]
    fn test_uppercase_is_normalized() {
        assert_eq!(Color::parse("FF00AAbb").to_hex(), "ff00aabb");
    }

    #[test]
    fn test_short_forms_are_opaque() {
        assert_eq!(Color::parse("a8ff00").to_hex(), "ffa8ff00");
        assert_eq!(Color::parse("#a8ff00").to_hex(), "ffa8ff00");
        assert_eq!(Color::parse("0f8").to_hex(), "ff00ff88");
    }

    #[test]
    fn test_invalid_falls_back_to_white() {
        assert_eq!(Color::parse(""), Color::WHITE);
        assert_eq!(Color::parse("ff00"), Color::WHITE);
        assert_eq!(Color::parse("gggggggg"), Color::WHITE);
        assert_eq!(Color::parse("+1234567"), Color::WHITE);
    }

    #[test]
    fn test_sampled_values_roundtrip() {
        for value in [0u32, 1, 0x00ff_00ff, 0x8000_0000, 0xdead_beef, u32::MAX] {
            let hex = format!("{value:08x}");
            assert_eq!(Color::parse(&hex).to_hex(), hex);
        }
    }
}
