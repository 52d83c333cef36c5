//! Pulse Theme System
//!
//! Colors for chart widgets, resolved per color scheme.
//!
//! # Overview
//!
//! - **Color scheme**: light or dark, held process-wide by [`ThemeState`]
//! - **Palette tokens**: semantic chart colors (text, tooltip, inactive, ok...)
//! - **Overrides**: runtime replacement of single tokens, repaint only
//! - **Hex colors**: `"#RRGGBB"` / `"#RRGGBBAA"` strings for configuration
//!
//! # Quick Start
//!
//! ```rust
//! use pulse_theme::{ChartColorToken, ColorScheme, ThemeState};
//!
//! let theme = ThemeState::new(ColorScheme::Dark);
//! assert!(theme.is_dark());
//! let text = theme.palette().get(ChartColorToken::Text);
//! assert!(text.a > 0.0);
//! ```

pub mod hex;
pub mod state;
pub mod tokens;

pub use hex::{parse_hex_color, HexColor, ThemeError};
pub use state::ThemeState;
pub use tokens::{ChartColorToken, ChartPalette};

use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}
