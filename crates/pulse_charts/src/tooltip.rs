//! Tooltip placement and drawing.
//!
//! The box sits up and to the right of the anchor by default. It flips to
//! the left (with right-aligned text) when it would leave the right edge,
//! and below the anchor when it would leave the top. Whatever remains out
//! of bounds after the flips is clamped; a box larger than the bounds is
//! shrunk to them first.

use pulse_paint::{FontWeight, PaintContext, Point, Rect, StrokeStyle, TextAlign, TextStyle};

use crate::widget::{Env, Viewport};

/// Gap between the anchor point and the tooltip box.
pub const TOOLTIP_OFFSET: f32 = 4.0;

const PADDING: f32 = 5.0;
const FONT_SIZE: f32 = 11.0;
const CORNER_RADIUS: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub rect: Rect,
    pub align: TextAlign,
}

/// Position a `width` x `height` box next to `anchor` inside `bounds`.
pub fn place(anchor: Point, width: f32, height: f32, bounds: Rect) -> TooltipPlacement {
    let width = width.min(bounds.width.max(0.0));
    let height = height.min(bounds.height.max(0.0));
    let mut x = anchor.x + TOOLTIP_OFFSET;
    let mut y = anchor.y - TOOLTIP_OFFSET - height;
    let mut align = TextAlign::Left;

    if x + width > bounds.right() {
        x = anchor.x - TOOLTIP_OFFSET - width;
        align = TextAlign::Right;
    }
    if y < bounds.y {
        y = anchor.y + TOOLTIP_OFFSET;
    }

    x = x.min(bounds.right() - width).max(bounds.x);
    y = y.min(bounds.bottom() - height).max(bounds.y);

    TooltipPlacement {
        rect: Rect::new(x, y, width, height),
        align,
    }
}

/// Draw a multi-line tooltip next to `anchor`.
///
/// `min_width` widens the box beyond its measured text when set.
pub fn draw(
    ctx: &mut PaintContext,
    env: &Env<'_>,
    viewport: &Viewport,
    anchor: Point,
    lines: &[String],
    min_width: Option<f32>,
) -> Option<TooltipPlacement> {
    if lines.is_empty() {
        return None;
    }

    let palette = env.palette;
    let style = TextStyle::new(FONT_SIZE)
        .with_color(palette.tooltip_text)
        .with_weight(FontWeight::Medium);
    let line_height = env.measurer.line_height(&style);
    let text_width = lines
        .iter()
        .map(|l| env.measurer.measure_width(l, &style))
        .fold(0.0f32, f32::max);

    let width = (text_width + PADDING * 2.0).max(min_width.unwrap_or(0.0)).ceil();
    let height = (line_height * lines.len() as f32 + PADDING * 2.0).ceil();
    let placement = place(anchor, width, height, viewport.rect);
    let rect = placement.rect;

    ctx.fill_rounded_rect(rect, CORNER_RADIUS, palette.tooltip_background);
    ctx.stroke_rounded_rect(
        rect,
        CORNER_RADIUS,
        StrokeStyle::new(palette.tooltip_border, viewport.hairline()),
    );

    let text_x = match placement.align {
        TextAlign::Right => rect.right() - PADDING,
        TextAlign::Center => rect.center().x,
        TextAlign::Left => rect.x + PADDING,
    };
    let style = style.with_align(placement.align);
    for (i, line) in lines.iter().enumerate() {
        let y = rect.y + PADDING + line_height * i as f32;
        ctx.draw_text(line.as_str(), Point::new(text_x, y), style);
    }

    Some(placement)
}

#[cfg(test)]
mod tests {
    use pulse_paint::PaintCommand;
    use pulse_theme::ChartPalette;

    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    fn inside(r: Rect, bounds: Rect) -> bool {
        r.x >= bounds.x
            && r.y >= bounds.y
            && r.right() <= bounds.right() + 1e-4
            && r.bottom() <= bounds.bottom() + 1e-4
    }

    #[test]
    fn default_is_above_right() {
        let p = place(Point::new(50.0, 50.0), 40.0, 20.0, BOUNDS);
        assert_eq!(p.rect, Rect::new(54.0, 26.0, 40.0, 20.0));
        assert_eq!(p.align, TextAlign::Left);
    }

    #[test]
    fn flips_left_on_right_overflow() {
        let p = place(Point::new(190.0, 50.0), 40.0, 20.0, BOUNDS);
        assert_eq!(p.rect.x, 146.0);
        assert_eq!(p.align, TextAlign::Right);
    }

    #[test]
    fn flips_below_on_top_overflow() {
        let p = place(Point::new(50.0, 5.0), 40.0, 20.0, BOUNDS);
        assert_eq!(p.rect.y, 9.0);
        assert_eq!(p.align, TextAlign::Left);
    }

    #[test]
    fn corners_stay_inside_bounds() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(200.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(200.0, 100.0),
        ];
        for anchor in corners {
            for (w, h) in [(10.0, 10.0), (80.0, 30.0), (199.0, 99.0), (250.0, 120.0)] {
                let p = place(anchor, w, h, BOUNDS);
                assert!(
                    inside(p.rect, BOUNDS),
                    "anchor={anchor:?} size={w}x{h} -> {:?}",
                    p.rect
                );
            }
        }
    }

    #[test]
    fn oversized_box_shrinks_to_bounds() {
        let bounds = Rect::new(0.0, 0.0, 30.0, 20.0);
        let p = place(Point::new(15.0, 10.0), 50.0, 30.0, bounds);
        assert_eq!(p.rect, bounds);

        let p = place(Point::new(25.0, 2.0), 50.0, 10.0, bounds);
        assert_eq!(p.rect.width, 30.0);
        assert!(inside(p.rect, bounds));
    }

    #[test]
    fn draw_emits_box_and_aligned_lines() {
        let palette = ChartPalette::dark();
        let env = Env::new(&palette);
        let viewport = Viewport::new(200.0, 100.0);
        let mut ctx = PaintContext::new();
        let lines = vec!["0.42".to_string(), "12:00:00".to_string()];
        let placement = draw(&mut ctx, &env, &viewport, Point::new(195.0, 60.0), &lines, None)
            .expect("placement");
        assert_eq!(placement.align, TextAlign::Right);

        let texts: Vec<_> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawText { style, .. } => Some(style.align),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![TextAlign::Right, TextAlign::Right]);
        assert_eq!(ctx.commands()[0].kind(), "fill_rounded_rect");
    }
}
