use std::f32::consts::PI;

use pulse_paint::{Color, LineCap, PaintContext, Point, Rect, StrokeStyle};

use crate::common::{drawable_rect, fill_bg};
use crate::ring::{self, RingStroke, Segment};
use crate::widget::{Env, RedrawState, Viewport, Widget};

/// Upper half: 9 o'clock clockwise through 12 to 3 o'clock.
pub const START_ANGLE: f32 = PI;
pub const SWEEP: f32 = PI;

const HUB_RADIUS: f32 = 2.0;

/// Visual styling for the tachometer gauge.
#[derive(Clone, Debug)]
pub struct TachometerGaugeStyle {
    pub bg: Color,
    pub ring_width: f32,
    pub filled: bool,
    /// `None` uses the theme's text color.
    pub needle: Option<Color>,
    pub needle_width: f32,
}

impl Default for TachometerGaugeStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            ring_width: 5.0,
            filled: false,
            needle: None,
            needle_width: 1.5,
        }
    }
}

/// Segmented semicircle with a needle at the total active fraction.
pub struct TachometerGauge {
    segments: Vec<Segment>,
    style: TachometerGaugeStyle,
    redraw: RedrawState,
}

impl Default for TachometerGauge {
    fn default() -> Self {
        Self::new()
    }
}

impl TachometerGauge {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            style: TachometerGaugeStyle::default(),
            redraw: RedrawState::default(),
        }
    }

    pub fn with_style(mut self, style: TachometerGaugeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn style(&self) -> &TachometerGaugeStyle {
        &self.style
    }

    pub fn push_segments(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.redraw.request();
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: TachometerGaugeStyle) {
        self.style = style;
        self.redraw.request();
    }

    /// Total active fraction, clamped to the dial.
    pub fn needle_fraction(&self) -> f64 {
        ring::total(&self.segments).min(1.0)
    }
}

/// Pivot at the bottom center, radius fitting both the half width and the
/// full height.
pub fn dial_geometry(rect: Rect) -> (Point, f32) {
    let center = Point::new(rect.x + rect.width / 2.0, rect.bottom());
    (center, (rect.width / 2.0).min(rect.height))
}

pub fn needle_angle(fraction: f64) -> f32 {
    START_ANGLE + fraction.clamp(0.0, 1.0) as f32 * SWEEP
}

impl Widget for TachometerGauge {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "TachometerGauge") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let (center, outer) = dial_geometry(rect);
        let full = ring::complete(&self.segments, env.palette.inactive);
        let spans = ring::layout(&full, START_ANGLE, SWEEP);
        let stroke = RingStroke::from_flag(self.style.filled, self.style.ring_width);
        ring::draw_spans(ctx, center, outer, stroke, spans.iter());

        let (arc_radius, width) = stroke.geometry(outer);
        let length = (arc_radius - width / 2.0).max(outer * 0.5);
        let color = self.style.needle.unwrap_or(env.palette.text);
        let tip = center.polar(length, needle_angle(self.needle_fraction()));
        ctx.stroke_line(
            center,
            tip,
            StrokeStyle::new(color, self.style.needle_width).with_cap(LineCap::Round),
        );
        ctx.fill_circle(center, HUB_RADIUS, color);
    }

    fn redraw_state(&self) -> &RedrawState {
        &self.redraw
    }

    fn redraw_state_mut(&mut self) -> &mut RedrawState {
        &mut self.redraw
    }
}
