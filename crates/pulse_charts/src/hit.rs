use pulse_paint::{Point, Rect};

/// Index of the point closest to `x` horizontally.
///
/// `points` must be ordered by x. The nearest point at or left of the probe
/// competes with the nearest point at or right of it; ties go left.
pub fn nearest_by_x(points: &[Point], x: f32) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    // First index with p.x > x; everything before it is "under".
    let i = points.partition_point(|p| p.x <= x);
    if i == 0 {
        return Some(0);
    }
    if i >= points.len() {
        return Some(points.len() - 1);
    }
    let under = i - 1;
    let over = i;
    let du = (x - points[under].x).abs();
    let d_over = (points[over].x - x).abs();
    Some(if d_over < du { over } else { under })
}

/// Whether the pointer is within the plot's vertical extent.
///
/// Line and network charts show no tooltip outside of it.
pub fn within_vertical(rect: Rect, y: f32) -> bool {
    y >= rect.y && y <= rect.bottom()
}

/// Index of the first rect containing `p`.
pub fn first_containing(rects: &[Rect], p: Point) -> Option<usize> {
    rects.iter().position(|r| r.contains(p))
}
