//! Segmented ring layout shared by the pie, half-circle and tachometer
//! gauges.

use pulse_paint::{CircularArc, Color, LineCap, PaintContext, Point, Rect, StrokeStyle};

/// Totals within this distance of 1 need no remainder segment.
const FULL_EPSILON: f64 = 1e-9;

/// A fraction of the whole with its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub fraction: f64,
    pub color: Color,
}

impl Segment {
    pub fn new(fraction: f64, color: Color) -> Self {
        Self { fraction, color }
    }
}

fn clean_fraction(f: f64) -> f64 {
    if f.is_finite() {
        f.max(0.0)
    } else {
        0.0
    }
}

/// Sum of the non-negative fractions.
pub fn total(segments: &[Segment]) -> f64 {
    segments
        .iter()
        .map(|s| clean_fraction(s.fraction))
        .sum()
}

/// Append the inactive remainder so the list covers the whole ring.
///
/// Totals above 1 are kept as given; the ring then overdraws.
pub fn complete(segments: &[Segment], inactive: Color) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len() + 1);
    out.extend_from_slice(segments);

    let t = total(segments);
    if t < 1.0 - FULL_EPSILON {
        out.push(Segment::new(1.0 - t, inactive));
    } else if t > 1.0 + FULL_EPSILON {
        tracing::warn!(total = t, "ring::complete - segment fractions exceed 1");
    }
    out
}

/// Angular extent assigned to one segment, radians in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub start: f32,
    pub end: f32,
    pub color: Color,
}

impl ArcSpan {
    pub fn sweep(&self) -> f32 {
        self.end - self.start
    }
}

/// Lay segments out back to back, clockwise from `start_angle`.
pub fn layout(segments: &[Segment], start_angle: f32, sweep: f32) -> Vec<ArcSpan> {
    let mut angle = start_angle;
    segments
        .iter()
        .map(|s| {
            let fraction = clean_fraction(s.fraction);
            let start = angle;
            angle += fraction as f32 * sweep;
            ArcSpan {
                start,
                end: angle,
                color: s.color,
            }
        })
        .collect()
}

/// How a ring is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingStroke {
    /// Ring of the given line width at the outer edge.
    Thin(f32),
    /// Solid wedges reaching the center.
    Filled,
}

impl Default for RingStroke {
    fn default() -> Self {
        RingStroke::Thin(6.0)
    }
}

impl RingStroke {
    pub fn from_flag(filled: bool, ring_width: f32) -> Self {
        if filled {
            RingStroke::Filled
        } else {
            RingStroke::Thin(ring_width)
        }
    }

    /// `(arc_radius, line_width)` for a ring whose outer edge is `outer`.
    pub fn geometry(self, outer: f32) -> (f32, f32) {
        match self {
            RingStroke::Thin(width) => {
                let width = width.max(0.0).min(outer);
                (outer - width / 2.0, width)
            }
            // min(w, h) / 2 wide, centered halfway to the center.
            RingStroke::Filled => (outer / 2.0, outer),
        }
    }
}

/// Largest circle that fits `rect`.
pub fn fit_circle(rect: Rect) -> (Point, f32) {
    (rect.center(), rect.width.min(rect.height) / 2.0)
}

/// Stroke one arc per span, in the order given.
pub fn draw_spans<'a, I>(
    ctx: &mut PaintContext,
    center: Point,
    outer: f32,
    stroke: RingStroke,
    spans: I,
) where
    I: IntoIterator<Item = &'a ArcSpan>,
{
    let (radius, width) = stroke.geometry(outer);
    if radius <= 0.0 || width <= 0.0 {
        return;
    }
    for span in spans {
        if span.sweep().abs() <= f32::EPSILON {
            continue;
        }
        ctx.stroke_arc(
            CircularArc {
                center,
                radius,
                start_angle: span.start,
                end_angle: span.end,
                clockwise: true,
            },
            StrokeStyle::new(span.color, width).with_cap(LineCap::Butt),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use super::*;

    #[test]
    fn complete_appends_inactive_remainder() {
        let segs = [
            Segment::new(0.3, Color::RED),
            Segment::new(0.2, Color::BLUE),
        ];
        let inactive = Color::gray(0.5);
        let full = complete(&segs, inactive);
        assert_eq!(full.len(), 3);
        assert_eq!(full[2].color, inactive);
        assert!((full[2].fraction - 0.5).abs() < 1e-12);

        let spans = layout(&full, 0.0, TAU);
        let sweeps: Vec<f32> = spans.iter().map(|s| s.sweep() / TAU).collect();
        for (got, want) in sweeps.iter().zip([0.3f32, 0.2, 0.5]) {
            assert!((got - want).abs() < 1e-5, "{got} vs {want}");
        }
    }

    #[test]
    fn completed_rings_always_total_one() {
        for n in 0..6 {
            for step in [0.0, 0.01, 0.05, 0.1, 1.0 / 6.0] {
                let segs: Vec<_> = (0..n).map(|_| Segment::new(step, Color::RED)).collect();
                if total(&segs) > 1.0 {
                    continue;
                }
                let full = complete(&segs, Color::BLACK);
                assert!((total(&full) - 1.0).abs() < 1e-9, "n={n} step={step}");
            }
        }
    }

    #[test]
    fn overfull_lists_are_left_alone() {
        let segs = [Segment::new(0.8, Color::RED), Segment::new(0.6, Color::BLUE)];
        assert_eq!(complete(&segs, Color::BLACK), segs.to_vec());
    }

    #[test]
    fn spans_are_contiguous() {
        let segs = [
            Segment::new(0.25, Color::RED),
            Segment::new(0.25, Color::GREEN),
            Segment::new(0.5, Color::BLUE),
        ];
        let spans = layout(&segs, -PI / 2.0, TAU);
        assert_eq!(spans[0].start, -PI / 2.0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!((spans[2].end - (-PI / 2.0 + TAU)).abs() < 1e-5);
    }

    #[test]
    fn filled_stroke_is_half_the_short_side() {
        let (_, outer) = fit_circle(Rect::new(0.0, 0.0, 80.0, 60.0));
        assert_eq!(outer, 30.0);
        assert_eq!(RingStroke::Filled.geometry(outer), (15.0, 30.0));
        assert_eq!(RingStroke::Thin(6.0).geometry(outer), (27.0, 6.0));
    }
}
