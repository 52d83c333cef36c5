//! Theme state
//!
//! Widgets read colors during render. Changing the scheme or overriding a
//! token only requires a repaint, never a buffer or layout change, so the
//! state just raises a repaint flag the host can poll.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{OnceLock, RwLock};

use pulse_paint::Color;
use rustc_hash::FxHashMap;

use crate::tokens::{ChartColorToken, ChartPalette};
use crate::ColorScheme;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

pub struct ThemeState {
    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Dynamic color overrides
    color_overrides: RwLock<FxHashMap<ChartColorToken, Color>>,

    /// Flag indicating theme needs repaint (colors changed)
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Standalone state, e.g. one per embedding host or test.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(scheme),
            color_overrides: RwLock::new(FxHashMap::default()),
            needs_repaint: AtomicBool::new(false),
        }
    }

    /// Initialize the process-wide state. Returns `false` if it was already
    /// initialized (the existing state is kept).
    pub fn init(scheme: ColorScheme) -> bool {
        let fresh = THEME_STATE.set(ThemeState::new(scheme)).is_ok();
        if !fresh {
            tracing::debug!("ThemeState::init called twice; keeping existing state");
        }
        fresh
    }

    /// Process-wide state, initialized to the default scheme on first use.
    pub fn global() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| ThemeState::new(ColorScheme::default()))
    }

    // ========== Color Scheme ==========

    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap_or_else(|e| e.into_inner());
        if *current != scheme {
            tracing::debug!(
                "ThemeState::set_scheme - switching from {:?} to {:?}",
                *current,
                scheme
            );
            *current = scheme;
            self.needs_repaint.store(true, Ordering::Release);
        }
    }

    // ========== Colors ==========

    /// Palette for the current scheme with overrides applied.
    pub fn palette(&self) -> ChartPalette {
        let mut palette = ChartPalette::for_scheme(self.scheme());
        let overrides = self
            .color_overrides
            .read()
            .unwrap_or_else(|e| e.into_inner());
        for (token, color) in overrides.iter() {
            palette.set(*token, *color);
        }
        palette
    }

    pub fn color(&self, token: ChartColorToken) -> Color {
        self.palette().get(token)
    }

    pub fn set_color_override(&self, token: ChartColorToken, color: Color) {
        self.color_overrides
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token, color);
        self.needs_repaint.store(true, Ordering::Release);
    }

    pub fn clear_overrides(&self) {
        self.color_overrides
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.needs_repaint.store(true, Ordering::Release);
    }

    /// Returns and clears the repaint flag.
    pub fn take_needs_repaint(&self) -> bool {
        self.needs_repaint.swap(false, Ordering::AcqRel)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
