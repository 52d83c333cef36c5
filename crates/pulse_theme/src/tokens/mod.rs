//! Design tokens for chart widgets

mod color;

pub use color::{ChartColorToken, ChartPalette};
