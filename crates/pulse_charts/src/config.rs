//! Widget configuration (TOML)
//!
//! Every section and field is optional; missing values fall back to the
//! widget defaults.
//!
//! ```toml
//! scheme = "light"
//!
//! [line]
//! points = 120
//! scale = "square"
//! color = "#33aaff"
//!
//! [grid]
//! rows = 4
//! cols = 30
//! ```

use std::fs;
use std::path::Path;

use pulse_paint::Color;
use pulse_theme::{ColorScheme, HexColor};
use serde::Deserialize;

use crate::bar::{BlockBar, BlockBarStyle};
use crate::error::ConfigError;
use crate::grid::GridChart;
use crate::half_circle::{HalfCircleGauge, HalfCircleGaugeStyle};
use crate::line::{LineChart, LineChartStyle};
use crate::network::{NetworkChart, NetworkChartStyle};
use crate::pie::{PieChart, PieChartStyle};
use crate::scale::ScaleMode;
use crate::tachometer::{TachometerGauge, TachometerGaugeStyle};

/// Top-level chart configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartsConfig {
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub pie: PieConfig,
    #[serde(default)]
    pub half_circle: HalfCircleConfig,
    #[serde(default)]
    pub tachometer: TachometerConfig,
    #[serde(default)]
    pub bar: BarConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

fn default_points() -> usize {
    60
}

fn default_ring_width() -> f32 {
    6.0
}

fn default_gauge_ring_width() -> f32 {
    5.0
}

fn default_stroke_width() -> f32 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineConfig {
    /// Buffer capacity
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub scale: ScaleMode,
    #[serde(default)]
    pub color: Option<HexColor>,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            scale: ScaleMode::default(),
            color: None,
            transparent: false,
            stroke_width: default_stroke_width(),
        }
    }
}

impl LineConfig {
    pub fn build(&self) -> LineChart {
        let mut style = LineChartStyle {
            transparent: self.transparent,
            stroke_width: self.stroke_width,
            ..Default::default()
        };
        if let Some(color) = self.color {
            style.line = color.into();
        }
        LineChart::new(self.points)
            .with_style(style)
            .with_scale_mode(self.scale)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub scale: ScaleMode,
    #[serde(default)]
    pub common_scale: bool,
    #[serde(default)]
    pub reverse_order: bool,
    #[serde(default)]
    pub min_max_labels: bool,
    #[serde(default)]
    pub outbound: Option<HexColor>,
    #[serde(default)]
    pub inbound: Option<HexColor>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            scale: ScaleMode::default(),
            common_scale: false,
            reverse_order: false,
            min_max_labels: false,
            outbound: None,
            inbound: None,
        }
    }
}

impl NetworkConfig {
    pub fn build(&self) -> NetworkChart {
        let defaults = NetworkChartStyle::default();
        let style = NetworkChartStyle {
            outbound: self.outbound.map_or(defaults.outbound, Color::from),
            inbound: self.inbound.map_or(defaults.inbound, Color::from),
            min_max_labels: self.min_max_labels,
            ..defaults
        };
        let mut chart = NetworkChart::new(self.points).with_style(style);
        chart.set_scale_mode(self.scale);
        chart.set_common_scale(self.common_scale);
        chart.set_reverse_order(self.reverse_order);
        chart
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PieConfig {
    #[serde(default = "default_ring_width")]
    pub ring_width: f32,
    #[serde(default)]
    pub filled: bool,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            ring_width: default_ring_width(),
            filled: false,
        }
    }
}

impl PieConfig {
    pub fn build(&self) -> PieChart {
        PieChart::new().with_style(PieChartStyle {
            ring_width: self.ring_width,
            filled: self.filled,
            ..Default::default()
        })
    }
}

fn default_caption() -> String {
    "CPU".to_string()
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HalfCircleConfig {
    #[serde(default = "default_caption")]
    pub caption: String,
    #[serde(default = "default_gauge_ring_width")]
    pub ring_width: f32,
    #[serde(default)]
    pub filled: bool,
    #[serde(default)]
    pub color: Option<HexColor>,
}

impl Default for HalfCircleConfig {
    fn default() -> Self {
        Self {
            caption: default_caption(),
            ring_width: default_gauge_ring_width(),
            filled: false,
            color: None,
        }
    }
}

impl HalfCircleConfig {
    pub fn build(&self) -> HalfCircleGauge {
        let defaults = HalfCircleGaugeStyle::default();
        HalfCircleGauge::new(self.caption.clone()).with_style(HalfCircleGaugeStyle {
            color: self.color.map_or(defaults.color, Color::from),
            ring_width: self.ring_width,
            filled: self.filled,
            ..defaults
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TachometerConfig {
    #[serde(default = "default_gauge_ring_width")]
    pub ring_width: f32,
    #[serde(default)]
    pub filled: bool,
    #[serde(default)]
    pub needle: Option<HexColor>,
}

impl Default for TachometerConfig {
    fn default() -> Self {
        Self {
            ring_width: default_gauge_ring_width(),
            filled: false,
            needle: None,
        }
    }
}

impl TachometerConfig {
    pub fn build(&self) -> TachometerGauge {
        TachometerGauge::new().with_style(TachometerGaugeStyle {
            ring_width: self.ring_width,
            filled: self.filled,
            needle: self.needle.map(Color::from),
            ..Default::default()
        })
    }
}

fn default_columns() -> usize {
    8
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub color: Option<HexColor>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            color: None,
        }
    }
}

impl BarConfig {
    pub fn build(&self) -> BlockBar {
        let defaults = BlockBarStyle::default();
        BlockBar::new(self.columns).with_style(BlockBarStyle {
            color: self.color.map_or(defaults.color, Color::from),
            ..defaults
        })
    }
}

fn default_rows() -> usize {
    3
}

fn default_cols() -> usize {
    20
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

impl GridConfig {
    pub fn build(&self) -> anyhow::Result<GridChart> {
        GridChart::new(self.rows, self.cols)
    }
}

impl ChartsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChartsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("ChartsConfig::load - {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Reject values no widget can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 {
            return Err(ConfigError::Invalid {
                field: "grid.rows",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.grid.cols == 0 {
            return Err(ConfigError::Invalid {
                field: "grid.cols",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.grid.rows.checked_mul(self.grid.cols).is_none() {
            return Err(ConfigError::Invalid {
                field: "grid",
                reason: format!("{}x{} cells overflow", self.grid.rows, self.grid.cols),
            });
        }
        for (field, width) in [
            ("pie.ring_width", self.pie.ring_width),
            ("half_circle.ring_width", self.half_circle.ring_width),
            ("tachometer.ring_width", self.tachometer.ring_width),
        ] {
            if !(width.is_finite() && width >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a non-negative width, got {width}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ChartsConfig::from_toml_str("").unwrap();
        assert_eq!(config.scheme, ColorScheme::Dark);
        assert_eq!(config.line.points, 60);
        assert_eq!(config.line.scale, ScaleMode::Linear);
        assert_eq!((config.grid.rows, config.grid.cols), (3, 20));
        assert_eq!(config.half_circle.caption, "CPU");
    }

    #[test]
    fn sections_override_fields() {
        let config = ChartsConfig::from_toml_str(
            r##"
            scheme = "light"

            [line]
            points = 5
            scale = "logarithmic"
            color = "#ff0000"

            [network]
            reverse_order = true
            inbound = "#00ff0080"
            "##,
        )
        .unwrap();
        assert_eq!(config.scheme, ColorScheme::Light);
        let line = config.line.build();
        assert_eq!(line.buffer().capacity(), 5);
        assert_eq!(line.scale_mode(), ScaleMode::Logarithmic);
        assert_eq!(line.style().line.to_rgba8(), [255, 0, 0, 255]);

        let net = config.network.build();
        assert_eq!(net.style().inbound.to_rgba8(), [0, 255, 0, 128]);
        assert_eq!(net.channel_order().0, crate::network::Channel::Inbound);
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            ChartsConfig::from_toml_str("[line]\nscale = \"cubic\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ChartsConfig::from_toml_str("[bar]\ncolor = \"#12\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ChartsConfig::from_toml_str("[grid]\nrows = 0"),
            Err(ConfigError::Invalid { field: "grid.rows", .. })
        ));
        assert!(matches!(
            ChartsConfig::from_toml_str(&format!("[grid]\nrows = {}\ncols = 2", i64::MAX)),
            Err(ConfigError::Invalid { field: "grid", .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ChartsConfig::load("/definitely/not/here/charts.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("charts.toml"));
    }
}
