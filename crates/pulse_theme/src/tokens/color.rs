//! Color tokens for chart widgets

use pulse_paint::Color;

use crate::ColorScheme;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ChartColorToken {
    // Surface
    Background,

    // Text colors
    Text,
    TextSecondary,

    // Tooltip colors
    TooltipBackground,
    TooltipBorder,
    TooltipText,

    // Interaction
    Crosshair,

    // Neutral color for unused ring/arc remainder and unlit bar blocks
    Inactive,

    // Status
    Ok,
    NotOk,

    // Series defaults
    Accent,
    Outbound,
    Inbound,
}

/// Complete set of chart color tokens for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPalette {
    pub background: Color,

    pub text: Color,
    pub text_secondary: Color,

    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,

    pub crosshair: Color,
    pub inactive: Color,

    pub ok: Color,
    pub not_ok: Color,

    pub accent: Color,
    pub outbound: Color,
    pub inbound: Color,
}

impl ChartPalette {
    pub fn dark() -> Self {
        Self {
            background: Color::rgba(0.08, 0.09, 0.11, 1.0),
            text: Color::rgba(1.0, 1.0, 1.0, 0.85),
            text_secondary: Color::rgba(1.0, 1.0, 1.0, 0.55),
            tooltip_background: Color::rgba(0.12, 0.13, 0.16, 0.95),
            tooltip_border: Color::rgba(1.0, 1.0, 1.0, 0.12),
            tooltip_text: Color::rgba(1.0, 1.0, 1.0, 0.90),
            crosshair: Color::rgba(1.0, 1.0, 1.0, 0.35),
            inactive: Color::rgba(0.75, 0.75, 0.78, 0.25),
            ok: Color::rgba(0.40, 0.85, 0.55, 1.0),
            not_ok: Color::rgba(0.95, 0.35, 0.35, 1.0),
            accent: Color::rgba(0.35, 0.65, 1.0, 1.0),
            outbound: Color::rgba(0.95, 0.40, 0.35, 1.0),
            inbound: Color::rgba(0.35, 0.65, 1.0, 1.0),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::rgba(0.98, 0.98, 0.99, 1.0),
            text: Color::rgba(0.0, 0.0, 0.0, 0.85),
            text_secondary: Color::rgba(0.0, 0.0, 0.0, 0.55),
            tooltip_background: Color::rgba(0.97, 0.97, 0.98, 0.95),
            tooltip_border: Color::rgba(0.0, 0.0, 0.0, 0.12),
            tooltip_text: Color::rgba(0.0, 0.0, 0.0, 0.90),
            crosshair: Color::rgba(0.0, 0.0, 0.0, 0.35),
            inactive: Color::rgba(0.45, 0.45, 0.48, 0.25),
            ok: Color::rgba(0.20, 0.65, 0.35, 1.0),
            not_ok: Color::rgba(0.85, 0.22, 0.22, 1.0),
            accent: Color::rgba(0.15, 0.45, 0.90, 1.0),
            outbound: Color::rgba(0.85, 0.30, 0.25, 1.0),
            inbound: Color::rgba(0.15, 0.45, 0.90, 1.0),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    pub fn get(&self, token: ChartColorToken) -> Color {
        match token {
            ChartColorToken::Background => self.background,
            ChartColorToken::Text => self.text,
            ChartColorToken::TextSecondary => self.text_secondary,
            ChartColorToken::TooltipBackground => self.tooltip_background,
            ChartColorToken::TooltipBorder => self.tooltip_border,
            ChartColorToken::TooltipText => self.tooltip_text,
            ChartColorToken::Crosshair => self.crosshair,
            ChartColorToken::Inactive => self.inactive,
            ChartColorToken::Ok => self.ok,
            ChartColorToken::NotOk => self.not_ok,
            ChartColorToken::Accent => self.accent,
            ChartColorToken::Outbound => self.outbound,
            ChartColorToken::Inbound => self.inbound,
        }
    }

    pub fn set(&mut self, token: ChartColorToken, color: Color) {
        let slot = match token {
            ChartColorToken::Background => &mut self.background,
            ChartColorToken::Text => &mut self.text,
            ChartColorToken::TextSecondary => &mut self.text_secondary,
            ChartColorToken::TooltipBackground => &mut self.tooltip_background,
            ChartColorToken::TooltipBorder => &mut self.tooltip_border,
            ChartColorToken::TooltipText => &mut self.tooltip_text,
            ChartColorToken::Crosshair => &mut self.crosshair,
            ChartColorToken::Inactive => &mut self.inactive,
            ChartColorToken::Ok => &mut self.ok,
            ChartColorToken::NotOk => &mut self.not_ok,
            ChartColorToken::Accent => &mut self.accent,
            ChartColorToken::Outbound => &mut self.outbound,
            ChartColorToken::Inbound => &mut self.inbound,
        };
        *slot = color;
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::dark()
    }
}
