use serde::Deserialize;

/// Perceptual mapping from a value to a pixel extent.
///
/// `None` expects pre-normalized fractions and multiplies them by the
/// available height; every other mode maps a value as a proportion of the
/// current maximum, after applying its transform to both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    None,
    #[default]
    Linear,
    Square,
    Cube,
    Logarithmic,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 5] = [
        ScaleMode::None,
        ScaleMode::Linear,
        ScaleMode::Square,
        ScaleMode::Cube,
        ScaleMode::Logarithmic,
    ];

    fn is_transformed(self) -> bool {
        matches!(
            self,
            ScaleMode::Square | ScaleMode::Cube | ScaleMode::Logarithmic
        )
    }

    // Non-positive inputs are undefined (or negative) under every transform.
    fn transform(self, v: f64) -> f64 {
        if !(v > 0.0) {
            return 0.0;
        }
        match self {
            ScaleMode::Square => v.sqrt(),
            ScaleMode::Cube => v.cbrt(),
            ScaleMode::Logarithmic => (v * 100.0).ln(),
            ScaleMode::None | ScaleMode::Linear => v,
        }
    }
}

/// Map `value` to a height in `[0, max_height]` (for in-range inputs).
///
/// Under `None`, a value above 1 is taken as a raw magnitude and divided by
/// `max_value` first; fractions pass through untouched. This asymmetry is
/// relied on by gauges that feed fractions directly.
pub fn scale(mode: ScaleMode, value: f64, max_value: f64, max_height: f64) -> f64 {
    let mut value = value;
    let mut max = max_value;

    if mode == ScaleMode::None && value > 1.0 && max_value != 0.0 {
        value /= max_value;
    }

    if mode.is_transformed() {
        value = mode.transform(value);
        max = mode.transform(max);
    }

    if value < 0.0 {
        value = 0.0;
    }
    if !(max > 0.0) {
        max = 1.0;
    }

    let height = match mode {
        ScaleMode::None => value * max_height,
        _ => max_height * value / max,
    };

    if height.is_finite() {
        height
    } else {
        0.0
    }
}
