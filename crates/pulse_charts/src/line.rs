use std::time::SystemTime;

use pulse_paint::{
    Color, LineCap, LineJoin, PaintContext, Path, PathBuilder, Point, Rect, StrokeStyle,
};

use crate::buffer::{Sample, SampleBuffer, Slot};
use crate::common::{draw_crosshair, drawable_rect, fill_bg};
use crate::format::{format_compact, format_time_of_day};
use crate::hit::{nearest_by_x, within_vertical};
use crate::interaction::InteractionState;
use crate::scale::{scale, ScaleMode};
use crate::segments::runs_by_gap;
use crate::tooltip;
use crate::widget::{Env, PointerEvent, RedrawState, Viewport, Widget};

const FILL_ALPHA: f32 = 0.5;
const TRANSPARENT_FILL_ALPHA: f32 = 0.2;

/// Visual styling for the line chart.
#[derive(Clone, Debug)]
pub struct LineChartStyle {
    /// Fully transparent backgrounds are not drawn.
    pub bg: Color,
    pub line: Color,
    pub stroke_width: f32,
    /// Lighter area fill under the line.
    pub transparent: bool,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            line: Color::rgba(0.35, 0.65, 1.0, 1.0),
            stroke_width: 1.0,
            transparent: false,
        }
    }
}

impl LineChartStyle {
    pub fn fill_color(&self) -> Color {
        let alpha = if self.transparent {
            TRANSPARENT_FILL_ALPHA
        } else {
            FILL_ALPHA
        };
        self.line.with_alpha(alpha)
    }
}

/// Rolling single-series line chart with gaps.
pub struct LineChart {
    buffer: SampleBuffer,
    style: LineChartStyle,
    scale_mode: ScaleMode,
    value_format: fn(f64) -> String,
    interaction: InteractionState<Slot>,
    redraw: RedrawState,
    runs: Vec<(usize, usize)>,
}

impl LineChart {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: SampleBuffer::new(capacity),
            style: LineChartStyle::default(),
            scale_mode: ScaleMode::default(),
            value_format: format_compact,
            interaction: InteractionState::new(),
            redraw: RedrawState::default(),
            runs: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: LineChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn style(&self) -> &LineChartStyle {
        &self.style
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    pub fn is_frozen(&self) -> bool {
        self.interaction.is_frozen()
    }

    pub fn push_sample(&mut self, value: f64, timestamp: SystemTime) {
        self.push(Slot::Present(Sample::new(value, timestamp)));
    }

    /// Record a tick with no data; the line breaks here.
    pub fn push_gap(&mut self) {
        self.push(Slot::Empty);
    }

    pub fn push(&mut self, slot: Slot) {
        self.buffer.push(slot);
        self.redraw.request();
    }

    pub fn resize(&mut self, capacity: usize) {
        self.buffer.resize(capacity);
        self.interaction.resize(capacity);
        self.redraw.request();
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        if self.scale_mode != mode {
            tracing::debug!("LineChart::set_scale_mode - {:?} -> {:?}", self.scale_mode, mode);
            self.scale_mode = mode;
        }
        self.redraw.request();
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.line = color;
        self.redraw.request();
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.style.transparent = transparent;
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: LineChartStyle) {
        self.style = style;
        self.redraw.request();
    }

    /// Formatter for the tooltip's value line.
    pub fn set_value_format(&mut self, format: fn(f64) -> String) {
        self.value_format = format;
        self.redraw.request();
    }
}

/// X position of slot `index` when `capacity` slots span `rect`.
pub fn column_x(rect: Rect, index: usize, capacity: usize) -> f32 {
    if capacity <= 1 {
        return rect.x;
    }
    rect.x + index as f32 * rect.width / (capacity - 1) as f32
}

/// Baseline-up y position of `value`.
pub fn value_y(rect: Rect, mode: ScaleMode, value: f64, max: f64) -> f32 {
    rect.bottom() - scale(mode, value, max, rect.height as f64) as f32
}

/// Running max over present samples, 1 when there is nothing positive.
pub fn running_max(buffer: &SampleBuffer) -> f64 {
    buffer.max_value().filter(|m| *m > 0.0).unwrap_or(1.0)
}

/// Screen position of every slot; gaps are `None`.
pub fn line_points(buffer: &SampleBuffer, rect: Rect, mode: ScaleMode) -> Vec<Option<Point>> {
    let capacity = buffer.capacity();
    let max = running_max(buffer);
    buffer
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.value()
                .map(|v| Point::new(column_x(rect, i, capacity), value_y(rect, mode, v, max)))
        })
        .collect()
}

/// Disjoint polylines, split at gaps.
pub fn polylines(points: &[Option<Point>], runs: &mut Vec<(usize, usize)>) -> Vec<Vec<Point>> {
    runs_by_gap(points.iter().map(Option::is_some), runs);
    runs.iter()
        .map(|&(s, e)| points[s..e].iter().flatten().copied().collect())
        .collect()
}

/// Closed area between a polyline and the baseline.
fn area_path(line: &[Point], baseline: f32) -> Path {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return Path::new();
    };
    let mut pb = PathBuilder::new().move_to(first.x, baseline);
    for p in line {
        pb = pb.line_to(p.x, p.y);
    }
    pb.line_to(last.x, baseline).close().build()
}

impl Widget for LineChart {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "LineChart") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let buffer = self.interaction.active(&self.buffer);
        if buffer.is_empty() {
            return;
        }

        let points = line_points(buffer, rect, self.scale_mode);
        let lines = polylines(&points, &mut self.runs);

        let stroke = StrokeStyle::new(self.style.line, self.style.stroke_width)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round);
        let fill = self.style.fill_color();
        for line in &lines {
            if let [only] = line.as_slice() {
                ctx.fill_circle(*only, self.style.stroke_width.max(1.0), self.style.line);
                continue;
            }
            ctx.fill_path(area_path(line, rect.bottom()), fill);
            ctx.stroke_path(Path::polyline(line), stroke.clone());
        }

        // Hover
        let Some(pointer) = self.interaction.pointer() else {
            return;
        };
        if !within_vertical(rect, pointer.y) {
            return;
        }
        let present: Vec<(usize, Point)> = points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i, p)))
            .collect();
        let xs: Vec<Point> = present.iter().map(|(_, p)| *p).collect();
        let Some(hit) = nearest_by_x(&xs, pointer.x) else {
            return;
        };
        let (index, point) = present[hit];
        let Some(sample) = buffer.get(index).and_then(Slot::sample) else {
            return;
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
            (self.value_format)(sample.value),
            format_time_of_day(sample.timestamp),
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

#[cfg(test)]
mod tests {
    use pulse_paint::PaintCommand;
    use pulse_theme::ChartPalette;

    use super::*;

    fn chart_with(values: &[Option<f64>]) -> LineChart {
        let mut chart = LineChart::new(values.len());
        for v in values {
            match v {
                Some(v) => chart.push_sample(*v, SystemTime::UNIX_EPOCH),
                None => chart.push_gap(),
            }
        }
        chart
    }

    fn kinds(cmds: &[PaintCommand]) -> Vec<&'static str> {
        cmds.iter().map(|c| c.kind()).collect()
    }

    #[test]
    fn x_spans_the_width() {
        let r = Rect::new(10.0, 0.0, 100.0, 50.0);
        assert_eq!(column_x(r, 0, 5), 10.0);
        assert_eq!(column_x(r, 4, 5), 110.0);
        assert_eq!(column_x(r, 0, 1), 10.0);
    }

    #[test]
    fn gaps_split_the_line() {
        let chart = chart_with(&[Some(0.1), Some(0.2), None, Some(0.4), Some(0.5)]);
        let rect = Rect::new(0.0, 0.0, 40.0, 100.0);
        let points = line_points(chart.buffer(), rect, ScaleMode::Linear);
        let mut runs = Vec::new();
        let lines = polylines(&points, &mut runs);
        assert_eq!(runs, vec![(0, 2), (3, 5)]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[1][0].x, 30.0);
        // max 0.5 is the top edge
        assert!((lines[1][1].y - 0.0).abs() < 1e-4);
        assert!((lines[0][0].y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn render_fills_and_strokes_each_run() {
        let mut chart = chart_with(&[Some(0.1), Some(0.2), None, Some(0.4), Some(0.5)]);
        let palette = ChartPalette::dark();
        let env = Env::new(&palette);
        let cmds = chart.draw(&Viewport::new(40.0, 20.0), &env);
        assert_eq!(
            kinds(&cmds),
            vec!["fill_path", "stroke_path", "fill_path", "stroke_path"]
        );
        if let PaintCommand::FillPath { color, .. } = &cmds[0] {
            assert_eq!(color.a, 0.5);
        }
    }

    #[test]
    fn single_point_runs_are_dots() {
        let mut chart = chart_with(&[None, Some(0.3), None]);
        let palette = ChartPalette::dark();
        let cmds = chart.draw(&Viewport::new(40.0, 20.0), &Env::new(&palette));
        assert_eq!(kinds(&cmds), vec!["fill_circle"]);
    }

    #[test]
    fn transparent_flag_lightens_fill() {
        let mut style = LineChartStyle::default();
        style.transparent = true;
        assert_eq!(style.fill_color().a, 0.2);
    }

    #[test]
    fn hover_outside_vertical_extent_has_no_tooltip() {
        let mut chart = chart_with(&[Some(0.1), Some(0.2)]);
        let palette = ChartPalette::dark();
        let env = Env::new(&palette);
        let viewport = Viewport::new(40.0, 20.0);

        chart.on_pointer(PointerEvent::Move(Point::new(5.0, 50.0)));
        let outside = chart.draw(&viewport, &env);
        assert!(!kinds(&outside).contains(&"draw_text"));

        chart.on_pointer(PointerEvent::Move(Point::new(5.0, 10.0)));
        let inside = chart.draw(&viewport, &env);
        let texts: Vec<_> = inside
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["0.1".to_string(), "00:00:00".to_string()]);
    }

    #[test]
    fn frozen_chart_keeps_showing_snapshot() {
        let mut chart = chart_with(&[Some(0.1), Some(0.2)]);
        chart.on_pointer(PointerEvent::Press(Point::new(1.0, 1.0)));
        chart.push_gap();
        chart.push_gap();
        let palette = ChartPalette::dark();
        let cmds = chart.draw(&Viewport::new(40.0, 20.0), &Env::new(&palette));
        assert!(kinds(&cmds).contains(&"stroke_path"));

        chart.on_pointer(PointerEvent::Release);
        chart.on_pointer(PointerEvent::Exit);
        let cmds = chart.draw(&Viewport::new(40.0, 20.0), &Env::new(&palette));
        assert!(cmds.is_empty());
    }

    #[test]
    fn empty_and_zero_capacity_buffers_draw_nothing() {
        let palette = ChartPalette::dark();
        let env = Env::new(&palette);
        let mut chart = LineChart::new(0);
        chart.push_sample(1.0, SystemTime::UNIX_EPOCH);
        assert!(chart.draw(&Viewport::new(40.0, 20.0), &env).is_empty());

        let mut chart = LineChart::new(4);
        assert!(chart.draw(&Viewport::new(40.0, 20.0), &env).is_empty());
        chart.push_sample(1.0, SystemTime::UNIX_EPOCH);
        assert!(chart.draw(&Viewport::new(0.0, 20.0), &env).is_empty());
    }
}
