use pulse_paint::{Color, PaintContext, Point, Rect, StrokeStyle};

use crate::widget::Viewport;

const CROSSHAIR_DASH: (f32, f32) = (3.0, 3.0);
const MARKER_RADIUS: f32 = 3.0;

/// The drawable rect, or `None` (logged) when the surface is not ready.
pub fn drawable_rect(viewport: &Viewport, widget: &str) -> Option<Rect> {
    if viewport.is_drawable() {
        Some(viewport.rect)
    } else {
        tracing::trace!(widget, ?viewport, "skipping frame, surface not ready");
        None
    }
}

pub fn fill_bg(ctx: &mut PaintContext, rect: Rect, bg: Color) {
    if bg.a <= 0.0 {
        return;
    }
    ctx.fill_rect(rect, bg);
}

/// Dashed vertical line at the pointer, dashed horizontal line through the
/// hovered point, and a ring marker on it.
pub fn draw_crosshair(
    ctx: &mut PaintContext,
    plot: Rect,
    pointer_x: f32,
    point: Point,
    color: Color,
    hairline: f32,
) {
    let x = pointer_x.clamp(plot.x, plot.right().max(plot.x));
    let dashed = StrokeStyle::new(color, hairline).with_dash(CROSSHAIR_DASH.0, CROSSHAIR_DASH.1);
    ctx.stroke_line(
        Point::new(x, plot.y),
        Point::new(x, plot.bottom()),
        dashed.clone(),
    );
    ctx.stroke_line(
        Point::new(plot.x, point.y),
        Point::new(plot.right(), point.y),
        dashed,
    );
    ctx.stroke_circle(point, MARKER_RADIUS, StrokeStyle::new(color, hairline * 1.5));
}
