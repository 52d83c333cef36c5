//! Pulse Demo - headless walkthrough of every chart widget
//!
//! Feeds synthetic CPU, network and status metrics into each widget for a
//! number of ticks, renders whenever a widget asks for a redraw and reports
//! what was painted.
//!
//! Run with:
//! `cargo run -p pulse_demo -- --ticks 120 --json`
//!
//! Logging honours `RUST_LOG` (default: `info`).

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use clap::Parser;
use pulse_charts::prelude::*;
use pulse_paint::{Color, PaintCommand, Point};
use pulse_theme::{ColorScheme, ThemeState};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Headless demo for the pulse chart widgets
#[derive(Parser, Debug)]
#[command(name = "pulse-demo")]
#[command(about = "Feed synthetic metrics through the pulse chart widgets")]
#[command(version)]
struct Args {
    /// Chart config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of data ticks to simulate
    #[arg(short, long, default_value = "120")]
    ticks: usize,

    /// Widget width in logical pixels
    #[arg(long, default_value = "160")]
    width: f32,

    /// Widget height in logical pixels
    #[arg(long, default_value = "48")]
    height: f32,

    /// Device pixels per logical pixel
    #[arg(long, default_value = "1.0")]
    scale_factor: f32,

    /// Force the dark scheme
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Force the light scheme
    #[arg(long)]
    light: bool,

    /// Press on the line chart at this tick and release at the end
    #[arg(long)]
    freeze_at: Option<usize>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

struct Dashboard {
    line: LineChart,
    network: NetworkChart,
    pie: PieChart,
    half_circle: HalfCircleGauge,
    tachometer: TachometerGauge,
    bar: BlockBar,
    grid: GridChart,
}

impl Dashboard {
    fn from_config(config: &ChartsConfig) -> Result<Self> {
        Ok(Self {
            line: config.line.build(),
            network: config.network.build(),
            pie: config.pie.build(),
            half_circle: config.half_circle.build(),
            tachometer: config.tachometer.build(),
            bar: config.bar.build(),
            grid: config.grid.build().context("building status grid")?,
        })
    }

    fn widgets_mut(&mut self) -> [(&'static str, &mut dyn Widget); 7] {
        [
            ("line", &mut self.line),
            ("network", &mut self.network),
            ("pie", &mut self.pie),
            ("half_circle", &mut self.half_circle),
            ("tachometer", &mut self.tachometer),
            ("bar", &mut self.bar),
            ("grid", &mut self.grid),
        ]
    }

    fn feed(&mut self, tick: usize, now: SystemTime, palette: &pulse_theme::ChartPalette) {
        let t = tick as f64;
        let cpu = 0.5 + 0.4 * (t * 0.3).sin();

        // every seventh sample is lost
        if tick % 7 == 6 {
            self.line.push_gap();
        } else {
            self.line.push_sample(cpu, now);
        }

        self.network.push_dual(
            40_000.0 * (1.0 + (t * 0.2).sin()),
            120_000.0 * (1.0 + (t * 0.15).cos()),
        );

        let user = 0.35 * cpu;
        let system = 0.15 * (1.0 - cpu);
        let segments = vec![
            Segment::new(user, palette.outbound),
            Segment::new(system, palette.inbound),
        ];
        self.pie.push_segments(segments.clone());
        self.pie.set_value(user + system);
        self.tachometer.push_segments(segments);

        self.half_circle.set_value(cpu * 100.0);

        let hot = (cpu > 0.85).then_some(Color::RED);
        self.bar.push_level(cpu, hot);

        self.grid.push_status(tick % 5 != 4);
    }
}

#[derive(Debug, Default, Serialize)]
struct WidgetReport {
    frames: usize,
    commands: usize,
    kinds: BTreeMap<&'static str, usize>,
}

impl WidgetReport {
    fn record(&mut self, commands: &[PaintCommand]) {
        self.frames += 1;
        self.commands = commands.len();
        self.kinds.clear();
        for cmd in commands {
            *self.kinds.entry(cmd.kind()).or_default() += 1;
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    scheme: ColorScheme,
    ticks: usize,
    frozen: bool,
    widgets: BTreeMap<&'static str, WidgetReport>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartsConfig::load(path)
            .with_context(|| format!("loading chart config {}", path.display()))?,
        None => ChartsConfig::default(),
    };

    let scheme = if args.dark {
        ColorScheme::Dark
    } else if args.light {
        ColorScheme::Light
    } else {
        config.scheme
    };
    ThemeState::init(scheme);
    let theme = ThemeState::global();
    theme.set_scheme(scheme);

    let viewport = Viewport::new(args.width, args.height).with_scale_factor(args.scale_factor);
    if !viewport.is_drawable() {
        tracing::warn!(
            "viewport {}x{} @{} is not drawable; nothing will be painted",
            args.width,
            args.height,
            args.scale_factor
        );
    }

    let mut dashboard = Dashboard::from_config(&config)?;
    let mut reports: BTreeMap<&'static str, WidgetReport> = BTreeMap::new();
    let start = SystemTime::now();

    tracing::info!("Running {} ticks ({:?} scheme)", args.ticks, scheme);

    for tick in 0..args.ticks {
        let palette = theme.palette();
        dashboard.feed(tick, start + Duration::from_secs(tick as u64), &palette);

        if args.freeze_at == Some(tick) {
            let pointer = Point::new(args.width / 2.0, args.height / 2.0);
            dashboard.line.on_pointer(PointerEvent::Enter(pointer));
            dashboard.line.on_pointer(PointerEvent::Press(pointer));
            tracing::info!("Froze line chart at tick {}", tick);
        }

        let env = Env::new(&palette);
        for (name, widget) in dashboard.widgets_mut() {
            if !widget.take_redraw() {
                continue;
            }
            let commands = widget.draw(&viewport, &env);
            reports.entry(name).or_default().record(&commands);
        }
    }

    let frozen = dashboard.line.is_frozen();
    if frozen {
        dashboard.line.on_pointer(PointerEvent::Release);
        dashboard.line.on_pointer(PointerEvent::Exit);
    }

    let summary = Summary {
        scheme,
        ticks: args.ticks,
        frozen,
        widgets: reports,
    };

    if args.json {
        let out = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{out}");
    } else {
        for (name, report) in &summary.widgets {
            tracing::info!(
                "{:<12} frames={:<4} commands={:<4} {:?}",
                name,
                report.frames,
                report.commands,
                report.kinds
            );
        }
    }

    Ok(())
}
