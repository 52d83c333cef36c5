use std::f32::consts::{FRAC_PI_2, TAU};

use pulse_paint::{Color, FontWeight, PaintContext, Point, TextAlign, TextStyle};

use crate::common::{drawable_rect, fill_bg};
use crate::format::format_percent;
use crate::ring::{self, RingStroke, Segment};
use crate::widget::{Env, RedrawState, Viewport, Widget};

/// Visual styling for the pie chart.
#[derive(Clone, Debug)]
pub struct PieChartStyle {
    pub bg: Color,
    pub ring_width: f32,
    /// Solid wedges instead of a thin ring.
    pub filled: bool,
    pub label_size: f32,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            ring_width: 6.0,
            filled: false,
            label_size: 10.0,
        }
    }
}

impl PieChartStyle {
    pub fn stroke(&self) -> RingStroke {
        RingStroke::from_flag(self.filled, self.ring_width)
    }
}

/// Full-circle segmented ring, 12 o'clock clockwise, with an optional
/// centered percentage.
pub struct PieChart {
    segments: Vec<Segment>,
    value: Option<f64>,
    style: PieChartStyle,
    redraw: RedrawState,
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new()
    }
}

impl PieChart {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            value: None,
            style: PieChartStyle::default(),
            redraw: RedrawState::default(),
        }
    }

    pub fn with_style(mut self, style: PieChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn style(&self) -> &PieChartStyle {
        &self.style
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn push_segments(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.redraw.request();
    }

    /// Fraction shown as the centered label, independent of the segments.
    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
        self.redraw.request();
    }

    pub fn clear_value(&mut self) {
        self.value = None;
        self.redraw.request();
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
        self.redraw.request();
    }

    pub fn set_ring_width(&mut self, width: f32) {
        self.style.ring_width = width;
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: PieChartStyle) {
        self.style = style;
        self.redraw.request();
    }
}

impl Widget for PieChart {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "PieChart") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let (center, outer) = ring::fit_circle(rect);
        let full = ring::complete(&self.segments, env.palette.inactive);
        let spans = ring::layout(&full, -FRAC_PI_2, TAU);
        // Last segment first: earlier segments overlap later ones at seams.
        ring::draw_spans(ctx, center, outer, self.style.stroke(), spans.iter().rev());

        if let Some(value) = self.value {
            let style = TextStyle::new(self.style.label_size)
                .with_color(env.palette.text)
                .with_weight(FontWeight::Medium)
                .with_align(TextAlign::Center);
            let line_height = env.measurer.line_height(&style);
            ctx.draw_text(
                format_percent(value),
                Point::new(center.x, center.y - line_height / 2.0),
                style,
            );
        }
    }

    fn redraw_state(&self) -> &RedrawState {
        &self.redraw
    }

    fn redraw_state_mut(&mut self) -> &mut RedrawState {
        &mut self.redraw
    }
}
