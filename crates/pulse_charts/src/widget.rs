//! The host-facing widget contract.
//!
//! A widget never schedules its own redraws. It records whether it wants one
//! in a [`RedrawState`]; the host polls that flag, then calls
//! [`Widget::render`] or [`Widget::draw`] with a [`Viewport`].

use pulse_paint::{EstimatedTextMeasurer, PaintCommand, PaintContext, Point, Rect, TextMeasurer};
use pulse_theme::ChartPalette;

use crate::format::{format_speed, SpeedFormatter};

static ESTIMATED_MEASURER: EstimatedTextMeasurer = EstimatedTextMeasurer;
static DEFAULT_SPEED_FORMATTER: fn(f64) -> String = format_speed;

/// Target surface: a rect in device-independent pixels plus the device scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub rect: Rect,
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_rect(Rect::new(0.0, 0.0, width, height))
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect,
            scale_factor: 1.0,
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// `false` when the host surface is not ready (no area or no scale).
    pub fn is_drawable(&self) -> bool {
        self.rect.width > 0.0
            && self.rect.height > 0.0
            && self.scale_factor.is_finite()
            && self.scale_factor > 0.0
    }

    /// One device pixel, in logical units.
    pub fn hairline(&self) -> f32 {
        if self.scale_factor > 0.0 {
            1.0 / self.scale_factor
        } else {
            1.0
        }
    }
}

/// Collaborators a widget needs while rendering.
///
/// The palette is usually a per-frame copy of `ThemeState::palette()`.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub measurer: &'a dyn TextMeasurer,
    pub palette: &'a ChartPalette,
    pub speed: &'a dyn SpeedFormatter,
}

impl<'a> Env<'a> {
    pub fn new(palette: &'a ChartPalette) -> Self {
        Self {
            measurer: &ESTIMATED_MEASURER,
            palette,
            speed: &DEFAULT_SPEED_FORMATTER,
        }
    }

    pub fn with_measurer(mut self, measurer: &'a dyn TextMeasurer) -> Self {
        self.measurer = measurer;
        self
    }

    pub fn with_speed_formatter(mut self, speed: &'a dyn SpeedFormatter) -> Self {
        self.speed = speed;
        self
    }
}

/// Visibility-gated dirty flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawState {
    visible: bool,
    dirty: bool,
}

impl Default for RedrawState {
    fn default() -> Self {
        Self {
            visible: true,
            dirty: true,
        }
    }
}

impl RedrawState {
    /// Mark dirty, but only while visible.
    pub fn request(&mut self) {
        if self.visible {
            self.dirty = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Becoming visible always asks for one redraw.
    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.dirty = true;
        }
        self.visible = visible;
    }

    pub fn needs_redraw(&self) -> bool {
        self.visible && self.dirty
    }

    /// Returns whether a redraw was wanted and clears the flag.
    pub fn take(&mut self) -> bool {
        let wanted = self.needs_redraw();
        self.dirty = false;
        wanted
    }
}

/// Pointer input delivered by the host, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter(Point),
    Move(Point),
    Drag(Point),
    Exit,
    Press(Point),
    Release,
}

pub trait Widget {
    /// Record this frame's commands. Non-drawable viewports record nothing.
    fn render(&mut self, ctx: &mut PaintContext, viewport: &Viewport, env: &Env<'_>);

    /// Update interaction state. Widgets without a tooltip ignore input.
    fn on_pointer(&mut self, _event: PointerEvent) {}

    fn redraw_state(&self) -> &RedrawState;

    fn redraw_state_mut(&mut self) -> &mut RedrawState;

    fn needs_redraw(&self) -> bool {
        self.redraw_state().needs_redraw()
    }

    fn take_redraw(&mut self) -> bool {
        self.redraw_state_mut().take()
    }

    fn set_visible(&mut self, visible: bool) {
        self.redraw_state_mut().set_visible(visible);
    }

    /// Render into a fresh context and return the recorded commands.
    fn draw(&mut self, viewport: &Viewport, env: &Env<'_>) -> Vec<PaintCommand> {
        let mut ctx = PaintContext::new();
        self.render(&mut ctx, viewport, env);
        ctx.take_commands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_widgets_do_not_get_dirty() {
        let mut state = RedrawState::default();
        assert!(state.take());
        state.set_visible(false);
        state.request();
        assert!(!state.needs_redraw());

        state.set_visible(true);
        assert!(state.take());
        assert!(!state.take());
    }

    #[test]
    fn viewport_drawability_and_hairline() {
        assert!(Viewport::new(10.0, 10.0).is_drawable());
        assert!(!Viewport::new(0.0, 10.0).is_drawable());
        assert!(!Viewport::new(10.0, 10.0)
            .with_scale_factor(0.0)
            .is_drawable());
        assert_eq!(Viewport::new(1.0, 1.0).with_scale_factor(2.0).hairline(), 0.5);
    }

    #[test]
    fn env_defaults_format_speed() {
        let palette = ChartPalette::dark();
        let env = Env::new(&palette);
        assert_eq!(env.speed.format_speed(2_000.0), "2 KB/s");
    }
}
