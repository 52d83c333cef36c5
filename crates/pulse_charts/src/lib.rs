//! pulse_charts
//!
//! Self-contained monitoring widgets that turn rolling samples into recorded
//! paint commands.
//!
//! Every widget follows the same shape:
//! - data goes in through a push/set call and marks the widget dirty if it is
//!   visible
//! - the host asks [`Widget::needs_redraw`] and calls [`Widget::render`] (or
//!   [`Widget::draw`]) with a [`Viewport`]
//! - pointer events update the [`InteractionState`]; a press freezes a
//!   snapshot of the data until release

mod common;
mod segments;

pub mod bar;
pub mod buffer;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod half_circle;
pub mod hit;
pub mod interaction;
pub mod line;
pub mod network;
pub mod pie;
pub mod ring;
pub mod scale;
pub mod tachometer;
pub mod tooltip;
pub mod widget;

pub use buffer::{DualBuffer, DualSample, RollingBuffer, Sample, SampleBuffer, Slot};
pub use config::ChartsConfig;
pub use error::ConfigError;
pub use format::SpeedFormatter;
pub use interaction::InteractionState;
pub use ring::Segment;
pub use scale::{scale, ScaleMode};
pub use segments::runs_by_gap;
pub use widget::{Env, PointerEvent, RedrawState, Viewport, Widget};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::bar::{BlockBar, BlockBarStyle, ColoredLevel};
    pub use crate::buffer::{DualBuffer, DualSample, RollingBuffer, Sample, SampleBuffer, Slot};
    pub use crate::config::ChartsConfig;
    pub use crate::grid::{GridChart, GridChartStyle};
    pub use crate::half_circle::{HalfCircleGauge, HalfCircleGaugeStyle};
    pub use crate::line::{LineChart, LineChartStyle};
    pub use crate::network::{NetworkChart, NetworkChartStyle};
    pub use crate::pie::{PieChart, PieChartStyle};
    pub use crate::ring::{RingStroke, Segment};
    pub use crate::scale::ScaleMode;
    pub use crate::tachometer::{TachometerGauge, TachometerGaugeStyle};
    pub use crate::widget::{Env, PointerEvent, Viewport, Widget};
}
