//! Paint context - the main drawing API

use smallvec::SmallVec;

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::*;
use crate::text::TextStyle;

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    /// On/off lengths; empty means a solid line.
    pub dash: SmallVec<[f32; 2]>,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    pub fn with_dash(mut self, on: f32, off: f32) -> Self {
        self.dash = SmallVec::from_slice(&[on, off]);
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            dash: SmallVec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
    },
    StrokeRoundedRect {
        rect: RoundedRect,
        style: StrokeStyle,
    },
    FillCircle {
        circle: Circle,
        color: Color,
    },
    StrokeCircle {
        circle: Circle,
        style: StrokeStyle,
    },
    FillPath {
        path: Path,
        color: Color,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    StrokeArc {
        arc: CircularArc,
        style: StrokeStyle,
    },
    DrawText {
        text: String,
        position: Point,
        style: TextStyle,
    },
}

impl PaintCommand {
    /// Short stable name of the command kind, for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            PaintCommand::FillRect { .. } => "fill_rect",
            PaintCommand::FillRoundedRect { .. } => "fill_rounded_rect",
            PaintCommand::StrokeRoundedRect { .. } => "stroke_rounded_rect",
            PaintCommand::FillCircle { .. } => "fill_circle",
            PaintCommand::StrokeCircle { .. } => "stroke_circle",
            PaintCommand::FillPath { .. } => "fill_path",
            PaintCommand::StrokePath { .. } => "stroke_path",
            PaintCommand::StrokeArc { .. } => "stroke_arc",
            PaintCommand::DrawText { .. } => "draw_text",
        }
    }
}

/// The paint context widgets record into
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: impl Into<CornerRadius>, color: Color) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect: RoundedRect {
                rect,
                corner_radius: radius.into(),
            },
            color,
        });
    }

    pub fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: impl Into<CornerRadius>,
        style: StrokeStyle,
    ) {
        self.commands.push(PaintCommand::StrokeRoundedRect {
            rect: RoundedRect {
                rect,
                corner_radius: radius.into(),
            },
            style,
        });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(PaintCommand::FillCircle {
            circle: Circle::new(center, radius),
            color,
        });
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeCircle {
            circle: Circle::new(center, radius),
            style,
        });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, color: Color) {
        if path.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::FillPath { path, color });
    }

    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        if path.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::StrokePath { path, style });
    }

    /// Stroke a straight segment.
    pub fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.stroke_path(Path::polyline(&[from, to]), style);
    }

    pub fn stroke_arc(&mut self, arc: CircularArc, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeArc { arc, style });
    }

    // === Text ===

    pub fn draw_text(&mut self, text: impl Into<String>, position: Point, style: TextStyle) {
        self.commands.push(PaintCommand::DrawText {
            text: text.into(),
            position,
            style,
        });
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
