use pulse_paint::{Color, PaintContext, Rect};

use crate::buffer::RollingBuffer;
use crate::common::{drawable_rect, fill_bg};
use crate::widget::{Env, RedrawState, Viewport, Widget};

/// Visual styling for the status grid.
#[derive(Clone, Debug)]
pub struct GridChartStyle {
    pub bg: Color,
    pub spacing: f32,
    pub corner_radius: f32,
    /// `None` uses the theme's ok / not-ok colors.
    pub ok: Option<Color>,
    pub not_ok: Option<Color>,
}

impl Default for GridChartStyle {
    fn default() -> Self {
        Self {
            bg: Color::TRANSPARENT,
            spacing: 1.0,
            corner_radius: 1.0,
            ok: None,
            not_ok: None,
        }
    }
}

/// `rows x cols` status cells, filled column by column from the top-left.
pub struct GridChart {
    rows: usize,
    cols: usize,
    cells: RollingBuffer<Option<bool>>,
    style: GridChartStyle,
    redraw: RedrawState,
}

impl GridChart {
    pub fn new(rows: usize, cols: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(rows > 0, "grid needs at least one row");
        anyhow::ensure!(cols > 0, "grid needs at least one column");
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: RollingBuffer::new(len),
            style: GridChartStyle::default(),
            redraw: RedrawState::default(),
        })
    }

    pub fn with_style(mut self, style: GridChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &RollingBuffer<Option<bool>> {
        &self.cells
    }

    pub fn push_status(&mut self, ok: bool) {
        self.cells.push(Some(ok));
        self.redraw.request();
    }

    /// Change the layout, keeping the most recent statuses.
    pub fn set_dimensions(&mut self, rows: usize, cols: usize) -> anyhow::Result<()> {
        anyhow::ensure!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        let len = cell_count(rows, cols)?;
        self.rows = rows;
        self.cols = cols;
        self.cells.resize(len);
        self.redraw.request();
        Ok(())
    }

    pub fn set_colors(&mut self, ok: Color, not_ok: Color) {
        self.style.ok = Some(ok);
        self.style.not_ok = Some(not_ok);
        self.redraw.request();
    }

    pub fn set_style(&mut self, style: GridChartStyle) {
        self.style = style;
        self.redraw.request();
    }
}

fn cell_count(rows: usize, cols: usize) -> anyhow::Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| anyhow::anyhow!("grid of {rows}x{cols} cells is too large"))
}

/// `(column, row)` of buffer index `i`.
pub fn cell_position(i: usize, rows: usize) -> (usize, usize) {
    (i / rows, i % rows)
}

/// Rect of the cell at `(col, row)`; cells share the space minus `spacing`.
pub fn cell_rect(
    rect: Rect,
    rows: usize,
    cols: usize,
    col: usize,
    row: usize,
    spacing: f32,
) -> Rect {
    let w = ((rect.width - spacing * (cols - 1) as f32) / cols as f32).max(0.0);
    let h = ((rect.height - spacing * (rows - 1) as f32) / rows as f32).max(0.0);
    Rect::new(
        rect.x + col as f32 * (w + spacing),
        rect.y + row as f32 * (h + spacing),
        w,
        h,
    )
}

impl Widget for GridChart {
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>) {
        let Some(rect) = drawable_rect(viewport, "GridChart") else {
            return;
        };
        fill_bg(ctx, rect, self.style.bg);

        let ok = self.style.ok.unwrap_or(env.palette.ok);
        let not_ok = self.style.not_ok.unwrap_or(env.palette.not_ok);
        for (i, status) in self.cells.iter().enumerate() {
            let (col, row) = cell_position(i, self.rows);
            let cell = cell_rect(rect, self.rows, self.cols, col, row, self.style.spacing);
            let color = match status {
                None => env.palette.inactive,
                Some(true) => ok,
                Some(false) => not_ok,
            };
            ctx.fill_rounded_rect(cell, self.style.corner_radius, color);
        }
    }

    fn redraw_state(&self) -> &RedrawState {
        &self.redraw
    }

    fn redraw_state_mut(&mut self) -> &mut RedrawState {
        &mut self.redraw
    }
}
