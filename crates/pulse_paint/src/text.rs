//! Text styling and measurement
//!
//! Glyph shaping is the host's job. Widgets only need to know how wide a
//! string will be so they can size tooltip boxes and labels; that is what
//! [`TextMeasurer`] provides.

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Horizontal anchoring of a text command's position.
///
/// `Left` places the string's left edge at `position.x`, `Right` its right
/// edge, `Center` its midpoint. `position.y` is always the top of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: Color::WHITE,
            align: TextAlign::Left,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Width/height queries for strings drawn with a given style.
pub trait TextMeasurer {
    fn measure_width(&self, text: &str, style: &TextStyle) -> f32;

    fn line_height(&self, style: &TextStyle) -> f32 {
        style.size * 1.2
    }
}

/// Metric-free measurer used when the host has no font loaded.
///
/// Estimates ~0.55 × font size per character, slightly wider for heavy
/// weights.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
        let char_count = text.chars().count() as f32;
        let per_char = style.size * 0.55;
        let weight_factor = match style.weight {
            FontWeight::Semibold | FontWeight::Bold => 1.06,
            _ => 1.0,
        };
        char_count * per_char * weight_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_grows_with_length_and_weight() {
        let m = EstimatedTextMeasurer;
        let regular = TextStyle::new(10.0);
        let bold = regular.with_weight(FontWeight::Bold);
        assert!(m.measure_width("100%", &regular) > m.measure_width("9%", &regular));
        assert!(m.measure_width("42", &bold) > m.measure_width("42", &regular));
        assert_eq!(m.measure_width("", &regular), 0.0);
    }
}
