//! Hex color strings for configuration files

use pulse_paint::Color;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid hex color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidHexColor(String),
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<Color, ThemeError> {
    let digits = s.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidHexColor(s.to_string());
    if !(digits.len() == 6 || digits.len() == 8) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok(if digits.len() == 8 {
        Color::from_rgba8(
            ((value >> 24) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    } else {
        Color::from_hex(value)
    })
}

/// A [`Color`] that deserializes from a hex string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexColor(pub Color);

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s)
            .map(HexColor)
            .map_err(serde::de::Error::custom)
    }
}
