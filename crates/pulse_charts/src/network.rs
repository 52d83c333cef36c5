//! Dual-direction throughput chart.
//!
//! Outbound and inbound share one x axis and grow away from a center line,
//! one channel up and one down.

use pulse_paint::{
    Color, LineJoin, PaintContext, Path, PathBuilder, Point, Rect, StrokeStyle, TextStyle,
};

use crate::buffer::{DualBuffer, DualSample};
use crate::common::{draw_crosshair, drawable_rect, fill_bg};
use crate::hit::{nearest_by_x, within_vertical};
use crate::interaction::InteractionState;
use crate::line::column_x;
use crate::scale::{scale, ScaleMode};
use crate::tooltip;
use crate::widget::{Env, PointerEvent, RedrawState, Viewport, Widget};

const FILL_ALPHA: f32 = 0.5;
const LABEL_INSET: f32 = 2.0;

/// Visual styling for the network chart.
#[derive(Clone, Debug)]
pub struct NetworkChartStyle {
    pub bg: Color,
    pub outbound: Color,
    pub inbound: Color,
    pub stroke_width: f32,
    pub label_size: f32,
    /// Per-channel maximum labels in the left corners.
    pub min_max_labels: bool,
}

impl Default for NetworkChartStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            outbound: Color::rgba(0.95, 0.40, 0.35, 1.0),
            inbound: Color::rgba(0.35, 0.65, 1.0, 1.0),
            stroke_width: 1.0,
            label_size: 9.0,
            min_max_labels: false,
        }
    }
}

/// Which reading of a [`DualSample`] a channel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Outbound,
    Inbound,
}

impl Channel {
    pub fn value(self, sample: &DualSample) -> f64 {
        match self {
            Channel::Outbound => sample.outbound,
            Channel::Inbound => sample.inbound,
        }
    }

    fn max(self, buffer: &DualBuffer) -> f64 {
        match self {
            Channel::Outbound => buffer.max_outbound(),
            Channel::Inbound => buffer.max_inbound(),
        }
    }
}

/// Rolling dual-channel chart split by a center line.
pub struct NetworkChart {
    buffer: DualBuffer,
    style: NetworkChartStyle,
    scale_mode: ScaleMode,
    common_scale: bool,
    reverse_order: bool,
    interaction: InteractionState<DualSample>,
    redraw: RedrawState,
}

impl NetworkChart {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: DualBuffer::new(capacity),
            style: NetworkChartStyle::default(),
            scale_mode: ScaleMode::default(),
            common_scale: false,
            reverse_order: false,
            interaction: InteractionState::new(),
            redraw: RedrawState::default(),
        }
    }

    pub fn with_style(mut self, style: NetworkChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn buffer(&self) -> &DualBuffer {
        &self.buffer
    }

    pub fn style(&self) -> &NetworkChartStyle {
        &self.style
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    pub fn is_frozen(&self) -> bool {
        self.interaction.is_frozen()
    }

    pub fn push_dual(&mut self, outbound: f64, inbound: f64) {
        self.buffer.push(DualSample::new(outbound, inbound));
        self.redraw.request();
    }

    pub fn resize(&mut self, capacity: usize) {
        self.buffer.resize(capacity);
        self.interaction.resize(capacity);
        self.redraw.request();
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        if self.scale_mode != mode {
            tracing::debug!("NetworkChart::set_scale_mode - {:?} -> {:?}", self.scale_mode, mode);
            self.scale_mode = mode;
        }
        self.redraw.request();
    }

    /// Scale both channels against the larger of the two maxima.
    pub fn set_common_scale(&mut self, common: bool) {
        self.common_scale = common;
        self.redraw.request();
    }

    /// Draw inbound on top instead of outbound.
    pub fn set_reverse_order(&mut self, reverse: bool) {
        self.reverse_order = reverse;
        self.redraw.request();
    }

    pub fn set_colors(&mut self, outbound: Color, inbound: Color) {
        self.style.outbound = outbound;
        self.style.inbound = inbound;
        self.redraw.request();
    }

    pub fn set_min_max_labels(&mut self, show: bool) {
        self.style.min_max_labels = show;
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: NetworkChartStyle) {
        self.style = style;
        self.redraw.request();
    }

    /// `(top, bottom)` channels for the current order.
    pub fn channel_order(&self) -> (Channel, Channel) {
        if self.reverse_order {
            (Channel::Inbound, Channel::Outbound)
        } else {
            (Channel::Outbound, Channel::Inbound)
        }
    }

    fn channel_color(&self, channel: Channel) -> Color {
        match channel {
            Channel::Outbound => self.style.outbound,
            Channel::Inbound => self.style.inbound,
        }
    }
}

/// `(top_max, bottom_max)` used for scaling; each defaults to 1.
pub fn scale_maxima(
    buffer: &DualBuffer,
    top: Channel,
    bottom: Channel,
    common: bool,
) -> (f64, f64) {
    let positive = |m: f64| if m > 0.0 { m } else { 1.0 };
    let top_max = top.max(buffer);
    let bottom_max = bottom.max(buffer);
    if common {
        let m = positive(top_max.max(bottom_max));
        (m, m)
    } else {
        (positive(top_max), positive(bottom_max))
    }
}

pub fn center_y(rect: Rect) -> f32 {
    rect.y + rect.height / 2.0
}

/// Points of one channel, growing up from the center when `upward`.
pub fn channel_points(
    buffer: &DualBuffer,
    rect: Rect,
    mode: ScaleMode,
    channel: Channel,
    max: f64,
    upward: bool,
) -> Vec<Point> {
    let capacity = buffer.capacity();
    let center = center_y(rect);
    let half = (rect.height / 2.0) as f64;
    buffer
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let h = scale(mode, channel.value(s), max, half) as f32;
            let y = if upward { center - h } else { center + h };
            Point::new(column_x(rect, i, capacity), y)
        })
        .collect()
}

fn area_to_center(points: &[Point], center: f32) -> Path {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Path::new();
    };
    let mut pb = PathBuilder::new().move_to(first.x, center);
    for p in points {
        pb = pb.line_to(p.x, p.y);
    }
    pb.line_to(last.x, center).close().build()
}

impl Widget for NetworkChart {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "NetworkChart") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let buffer = self.interaction.active(&self.buffer);
        if buffer.is_empty() {
            return;
        }

        let (top, bottom) = self.channel_order();
        let (top_max, bottom_max) = scale_maxima(buffer, top, bottom, self.common_scale);
        let center = center_y(rect);
        let top_points = channel_points(buffer, rect, self.scale_mode, top, top_max, true);
        let bottom_points =
            channel_points(buffer, rect, self.scale_mode, bottom, bottom_max, false);

        for (channel, points) in [(top, &top_points), (bottom, &bottom_points)] {
            let color = self.channel_color(channel);
            ctx.fill_path(area_to_center(points, center), color.with_alpha(FILL_ALPHA));
            ctx.stroke_path(
                Path::polyline(points),
                StrokeStyle::new(color, self.style.stroke_width).with_join(LineJoin::Round),
            );
        }

        if self.style.min_max_labels {
            let top_style =
                TextStyle::new(self.style.label_size).with_color(self.channel_color(top));
            let bottom_style =
                TextStyle::new(self.style.label_size).with_color(self.channel_color(bottom));
            let line_height = env.measurer.line_height(&bottom_style);
            ctx.draw_text(
                env.speed.format_speed(top.max(buffer)),
                Point::new(rect.x + LABEL_INSET, rect.y + LABEL_INSET),
                top_style,
            );
            ctx.draw_text(
                env.speed.format_speed(bottom.max(buffer)),
                Point::new(rect.x + LABEL_INSET, rect.bottom() - LABEL_INSET - line_height),
                bottom_style,
            );
        }

        // Hover
        let Some(pointer) = self.interaction.pointer() else {
            return;
        };
        if !within_vertical(rect, pointer.y) {
            return;
        }
        let Some(index) = nearest_by_x(&top_points, pointer.x) else {
            return;
        };
        let Some(sample) = buffer.get(index) else {
            return;
        };
        let point = if pointer.y <= center {
            top_points[index]
        } else {
            bottom_points[index]
        };

        draw_crosshair(
            ctx,
            rect,
            pointer.x,
            point,
            env.palette.crosshair,
            viewport.hairline(),
        );
        let lines = vec![
            format!("Out: {}", env.speed.format_speed(sample.outbound)),
            format!("In: {}", env.speed.format_speed(sample.inbound)),
        ];
        tooltip::draw(ctx, env, viewport, point, &lines, None);
    }

    fn on_pointer(&mut self, event: PointerEvent) {
        if self.interaction.handle(event, &self.buffer) {
            self.redraw.request();
        }
    }

    fn redraw_state(&self) -> &RedrawState {
        &self.redraw
    }

    fn redraw_state_mut(&mut self) -> &mut RedrawState {
        &mut self.redraw
    }
}
