// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque RGB colors.

use core::fmt;

/// An opaque 8-bit-per-channel color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Failure parsing a `#rrggbb` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string did not start with `#`.
    #[error("color must start with '#'")]
    MissingHash,
    /// The string had the wrong number of hex digits.
    #[error("expected 3 or 6 hex digits, found {0}")]
    BadLength(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// A color from its channels.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short form `#rgb`.
    ///
    /// ```
    /// use dsviz_surface::Color;
    ///
    /// assert_eq!(Color::from_hex("#d1d1d1"), Ok(Color::rgb8(0xd1, 0xd1, 0xd1)));
    /// assert_eq!(Color::from_hex("#ccc"), Ok(Color::rgb8(0xcc, 0xcc, 0xcc)));
    /// assert!(Color::from_hex("d1d1d1").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        let mut nibbles = [0_u8; 6];
        let mut len = 0;
        for c in digits.chars() {
            let value = hex_nibble(c).ok_or(ColorParseError::InvalidDigit(c))?;
            if let Some(slot) = nibbles.get_mut(len) {
                *slot = value;
            }
            len += 1;
        }
        match len {
            3 => Ok(Self::rgb8(
                nibbles[0] * 17,
                nibbles[1] * 17,
                nibbles[2] * 17,
            )),
            6 => Ok(Self::rgb8(
                (nibbles[0] << 4) | nibbles[1],
                (nibbles[2] << 4) | nibbles[3],
                (nibbles[4] << 4) | nibbles[5],
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    /// Mean of the three channels.
    pub fn greyscale(self) -> f64 {
        (f64::from(self.r) + f64::from(self.g) + f64::from(self.b)) / 3.0
    }

    /// A label color that stays readable on top of `self`.
    ///
    /// Dark fills (greyscale mean at most 128) get a light label, the rest a
    /// dark one.
    pub fn contrasting_text(self) -> Self {
        if self.greyscale() <= 128.0 {
            Self::rgb8(0xdd, 0xdd, 0xdd)
        } else {
            Self::rgb8(0x11, 0x11, 0x11)
        }
    }
}

fn hex_nibble(c: char) -> Option<u8> {
    let b = u8::try_from(c).ok()?;
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parse_errors() {
        assert_eq!(Color::from_hex(""), Err(ColorParseError::MissingHash));
        assert_eq!(Color::from_hex("#12345"), Err(ColorParseError::BadLength(5)));
        assert_eq!(Color::from_hex("#1234567"), Err(ColorParseError::BadLength(7)));
        assert_eq!(Color::from_hex("#12g456"), Err(ColorParseError::InvalidDigit('g')));
    }

    #[test]
    fn display_round_trips_through_from_hex() {
        let c = Color::rgb8(0x10, 0xab, 0x0f);
        assert_eq!(c.to_string(), "#10ab0f");
        assert_eq!(Color::from_hex(&c.to_string()), Ok(c));
    }

    #[test]
    fn contrast_flips_at_the_midpoint() {
        assert_eq!(Color::rgb8(128, 128, 128).contrasting_text(), Color::rgb8(0xdd, 0xdd, 0xdd));
        assert_eq!(Color::rgb8(129, 129, 129).contrasting_text(), Color::rgb8(0x11, 0x11, 0x11));
        assert_eq!(Color::BLACK.contrasting_text(), Color::rgb8(0xdd, 0xdd, 0xdd));
    }
}
