//! Block bar: one column per partition, each a stack of 16 level blocks.
//!
//! Short widgets switch to a compact rendition with one proportional bar per
//! column, since 16 blocks would not be legible.

use pulse_paint::{Color, PaintContext, Point, Rect};

use crate::buffer::RollingBuffer;
use crate::common::{drawable_rect, fill_bg};
use crate::format::format_percent;
use crate::hit::first_containing;
use crate::interaction::InteractionState;
use crate::tooltip;
use crate::widget::{Env, PointerEvent, RedrawState, Viewport, Widget};

/// Blocks per column in segmented mode.
pub const LEVELS: usize = 16;

/// Heights below this render in compact mode.
pub const COMPACT_HEIGHT: f32 = 26.0;

/// A column's fill fraction with an optional color override.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColoredLevel {
    pub fraction: f64,
    /// `None` uses the bar's default color.
    pub color: Option<Color>,
}

impl ColoredLevel {
    pub fn new(fraction: f64, color: Option<Color>) -> Self {
        Self { fraction, color }
    }
}

/// Visual styling for the block bar.
#[derive(Clone, Debug)]
pub struct BlockBarStyle {
    pub bg: Color,
    pub color: Color,
    /// Horizontal gap between columns.
    pub spacing: f32,
    /// Vertical gap between blocks.
    pub block_spacing: f32,
    pub corner_radius: f32,
}

impl Default for BlockBarStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            color: Color::rgba(0.35, 0.65, 1.0, 1.0),
            spacing: 2.0,
            block_spacing: 1.0,
            corner_radius: 1.0,
        }
    }
}

pub struct BlockBar {
    columns: RollingBuffer<ColoredLevel>,
    style: BlockBarStyle,
    interaction: InteractionState<ColoredLevel>,
    redraw: RedrawState,
}

impl BlockBar {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: RollingBuffer::new(columns),
            style: BlockBarStyle::default(),
            interaction: InteractionState::new(),
            redraw: RedrawState::default(),
        }
    }

    pub fn with_style(mut self, style: BlockBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn columns(&self) -> &RollingBuffer<ColoredLevel> {
        &self.columns
    }

    pub fn style(&self) -> &BlockBarStyle {
        &self.style
    }

    /// Roll one column in on the right.
    pub fn push_level(&mut self, fraction: f64, color: Option<Color>) {
        self.columns.push(ColoredLevel::new(fraction, color));
        self.redraw.request();
    }

    /// Replace every column; the column count follows `levels.len()`.
    pub fn set_levels(&mut self, levels: Vec<ColoredLevel>) {
        if levels.len() != self.columns.capacity() {
            tracing::debug!(
                "BlockBar::set_levels - column count {} -> {}",
                self.columns.capacity(),
                levels.len()
            );
            self.interaction.resize(levels.len());
        }
        self.columns = RollingBuffer::from_vec(levels);
        self.redraw.request();
    }

    pub fn resize(&mut self, columns: usize) {
        self.columns.resize(columns);
        self.interaction.resize(columns);
        self.redraw.request();
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: BlockBarStyle) {
        self.style = style;
        self.redraw.request();
    }
}

/// Number of lit blocks for `fraction`.
pub fn active_blocks(fraction: f64) -> usize {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * LEVELS as f64).round() as usize
}

/// Equal-width column rects separated by `spacing`.
pub fn column_rects(rect: Rect, count: usize, spacing: f32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let gaps = spacing * (count - 1) as f32;
    let width = ((rect.width - gaps) / count as f32).max(0.0);
    (0..count)
        .map(|i| Rect::new(rect.x + i as f32 * (width + spacing), rect.y, width, rect.height))
        .collect()
}

/// Block `level` (0 = bottom) of a column.
pub fn block_rect(column: Rect, level: usize, block_spacing: f32) -> Rect {
    let gaps = block_spacing * (LEVELS - 1) as f32;
    let height = ((column.height - gaps) / LEVELS as f32).max(0.0);
    let y = column.bottom() - (level + 1) as f32 * height - level as f32 * block_spacing;
    Rect::new(column.x, y, column.width, height)
}

/// Tooltip box width for a label; wider labels get a wider box.
pub fn tooltip_width(label: &str) -> f32 {
    match label.chars().filter(char::is_ascii_digit).count() {
        0 | 1 => 26.0,
        2 => 32.0,
        _ => 38.0,
    }
}

impl Widget for BlockBar {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "BlockBar") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let columns = self.interaction.active(&self.columns);
        let rects = column_rects(rect, columns.len(), self.style.spacing);
        let inactive = env.palette.inactive;
        let compact = rect.height < COMPACT_HEIGHT;

        for (level, col) in columns.iter().zip(&rects) {
            let color = level.color.unwrap_or(self.style.color);
            if compact {
                ctx.fill_rounded_rect(*col, self.style.corner_radius, inactive);
                let h = col.height * level.fraction.clamp(0.0, 1.0) as f32;
                if h > 0.0 {
                    let bar = Rect::new(col.x, col.bottom() - h, col.width, h);
                    ctx.fill_rounded_rect(bar, self.style.corner_radius, color);
                }
            } else {
                let lit = active_blocks(level.fraction);
                for i in 0..LEVELS {
                    let block = block_rect(*col, i, self.style.block_spacing);
                    let fill = if i < lit { color } else { inactive };
                    ctx.fill_rounded_rect(block, self.style.corner_radius, fill);
                }
            }
        }

        // Hover
        let Some(pointer) = self.interaction.pointer() else {
            return;
        };
        let Some(index) = first_containing(&rects, pointer) else {
            return;
        };
        let Some(level) = columns.get(index) else {
            return;
        };
        let label = format_percent(level.fraction);
        let width = tooltip_width(&label);
        let anchor = Point::new(rects[index].center().x, pointer.y);
        tooltip::draw(ctx, env, viewport, anchor, &[label], Some(width));
    }

    fn on_pointer(&mut self, event: PointerEvent) {
        if self.interaction.handle(event, &self.columns) {
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
