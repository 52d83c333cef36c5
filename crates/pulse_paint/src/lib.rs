//! Pulse Paint API
//!
//! A small 2D drawing API that records commands instead of rasterizing them.
//! Chart widgets write into a [`PaintContext`]; the host replays the recorded
//! [`PaintCommand`] list on whatever surface it owns.
//!
//! # Features
//!
//! - Polyline and closed-area paths with dash patterns and line caps
//! - Shape primitives (rect, rounded rect, circle)
//! - Arc strokes with an explicit winding direction
//! - Text commands carrying size, weight, color and alignment
//! - Text measurement through the [`TextMeasurer`] seam

pub mod color;
pub mod context;
pub mod path;
pub mod primitives;
pub mod text;

pub use color::Color;
pub use context::{LineCap, LineJoin, PaintCommand, PaintContext, StrokeStyle};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use text::{EstimatedTextMeasurer, FontWeight, TextAlign, TextMeasurer, TextStyle};
