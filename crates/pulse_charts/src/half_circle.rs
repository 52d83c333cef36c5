use std::f32::consts::PI;

use pulse_paint::{Color, FontWeight, PaintContext, Point, TextAlign, TextStyle};

use crate::common::{drawable_rect, fill_bg};
use crate::format::format_percent;
use crate::ring::{self, RingStroke, Segment};
use crate::widget::{Env, RedrawState, Viewport, Widget};

/// Opening at the bottom: the arc runs from 7:30 clockwise to 4:30.
pub const START_ANGLE: f32 = 0.75 * PI;
pub const SWEEP: f32 = 1.5 * PI;

/// Visual styling for the half-circle gauge.
#[derive(Clone, Debug)]
pub struct HalfCircleGaugeStyle {
    pub bg: Color,
    pub color: Color,
    pub ring_width: f32,
    pub filled: bool,
    pub value_size: f32,
    pub caption_size: f32,
}

impl Default for HalfCircleGaugeStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            color: Color::rgba(0.35, 0.65, 1.0, 1.0),
            ring_width: 5.0,
            filled: false,
            value_size: 11.0,
            caption_size: 8.0,
        }
    }
}

/// Single-value 270° gauge with a caption.
pub struct HalfCircleGauge {
    value: f64,
    caption: String,
    style: HalfCircleGaugeStyle,
    redraw: RedrawState,
}

impl HalfCircleGauge {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            caption: caption.into(),
            style: HalfCircleGaugeStyle::default(),
            redraw: RedrawState::default(),
        }
    }

    pub fn with_style(mut self, style: HalfCircleGaugeStyle) -> Self {
        self.style = style;
        self
    }

    /// Stored fraction in `[0, 1]` for in-range input.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn style(&self) -> &HalfCircleGaugeStyle {
        &self.style
    }

    /// Accepts a fraction or a percentage; values above 1 are divided by 100.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value > 1.0 { value / 100.0 } else { value };
        self.redraw.request();
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
        self.redraw.request();
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
        self.redraw.request();
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: HalfCircleGaugeStyle) {
        self.style = style;
        self.redraw.request();
    }
}

impl Widget for HalfCircleGauge {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "HalfCircleGauge") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let (center, outer) = ring::fit_circle(rect);
        let active = [Segment::new(self.value, self.style.color)];
        let full = ring::complete(&active, env.palette.inactive);
        let spans = ring::layout(&full, START_ANGLE, SWEEP);
        let stroke = RingStroke::from_flag(self.style.filled, self.style.ring_width);
        ring::draw_spans(ctx, center, outer, stroke, spans.iter());

        let value_style = TextStyle::new(self.style.value_size)
            .with_color(env.palette.text)
            .with_weight(FontWeight::Semibold)
            .with_align(TextAlign::Center);
        let value_height = env.measurer.line_height(&value_style);
        ctx.draw_text(
            format_percent(self.value),
            Point::new(center.x, center.y - value_height / 2.0),
            value_style,
        );

        if !self.caption.is_empty() {
            let caption_style = TextStyle::new(self.style.caption_size)
                .with_color(env.palette.text_secondary)
                .with_align(TextAlign::Center);
            let caption_height = env.measurer.line_height(&caption_style);
            // Sits in the gauge's open bottom.
            let y = (center.y + outer - caption_height).max(center.y + value_height / 2.0);
            ctx.draw_text(self.caption.as_str(), Point::new(center.x, y), caption_style);
        }
    }

    fn redraw_state(&self) -> &RedrawState {
        &self.redraw
    }

    fn redraw_state_mut(&mut self) -> &mut RedrawState {
        &mut self.redraw
    }
}

#[cfg(test)]
mod tests {
    use pulse_paint::PaintCommand;
    use pulse_theme::ChartPalette;

    use super::*;

    #[test]
    fn percentages_are_normalized() {
        let mut gauge = HalfCircleGauge::new("CPU");
        gauge.set_value(55.0);
        assert!((gauge.value() - 0.55).abs() < 1e-12);
        gauge.set_value(0.55);
        assert_eq!(gauge.value(), 0.55);
        gauge.set_value(1.0);
        assert_eq!(gauge.value(), 1.0);
    }

    #[test]
    fn arc_covers_270_degrees() {
        let palette = ChartPalette::dark();
        let mut gauge = HalfCircleGauge::new("GPU");
        gauge.set_value(40.0);
        let cmds = gauge.draw(&Viewport::new(50.0, 50.0), &Env::new(&palette));
        let arcs: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                PaintCommand::StrokeArc { arc, style } => Some((*arc, style.color)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].0.start_angle, START_ANGLE);
        assert_eq!(arcs[1].1, palette.inactive);
        let total: f32 = arcs.iter().map(|(a, _)| a.sweep()).sum();
        assert!((total - SWEEP).abs() < 1e-5);
        assert!((arcs[0].0.sweep() - 0.4 * SWEEP).abs() < 1e-5);

        let texts: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["40%", "GPU"]);
    }

    #[test]
    fn zero_value_draws_only_inactive_arc() {
        let palette = ChartPalette::dark();
        let mut gauge = HalfCircleGauge::new("");
        let cmds = gauge.draw(&Viewport::new(50.0, 50.0), &Env::new(&palette));
        let arc_count = cmds.iter().filter(|c| c.kind() == "stroke_arc").count();
        assert_eq!(arc_count, 1);
    }
}
