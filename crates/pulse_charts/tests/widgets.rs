use std::time::SystemTime;

use pulse_charts::prelude::*;
use pulse_paint::{Color, PaintCommand, Point};
use pulse_theme::{ChartColorToken, ChartPalette, ColorScheme, ThemeState};

fn all_widgets() -> Vec<Box<dyn Widget>> {
    let config = ChartsConfig::default();
    vec![
        Box::new(config.line.build()),
        Box::new(config.network.build()),
        Box::new(config.pie.build()),
        Box::new(config.half_circle.build()),
        Box::new(config.tachometer.build()),
        Box::new(config.bar.build()),
        Box::new(config.grid.build().unwrap()),
    ]
}

#[test]
fn unready_surfaces_are_skipped() {
    let palette = ChartPalette::dark();
    let env = Env::new(&palette);
    for viewport in [
        Viewport::new(0.0, 40.0),
        Viewport::new(40.0, -1.0),
        Viewport::new(40.0, 40.0).with_scale_factor(0.0),
    ] {
        for mut widget in all_widgets() {
            assert!(widget.draw(&viewport, &env).is_empty());
        }
    }
}

#[test]
fn every_widget_renders_something_when_ready() {
    let palette = ChartPalette::light();
    let env = Env::new(&palette);
    let viewport = Viewport::new(80.0, 40.0).with_scale_factor(2.0);
    let mut widgets = all_widgets();
    // the line chart needs data to draw anything
    for widget in widgets.iter_mut().skip(1) {
        assert!(!widget.draw(&viewport, &env).is_empty());
    }
    assert!(widgets[0].draw(&viewport, &env).is_empty());
}

#[test]
fn hidden_pushes_request_one_redraw_on_show() {
    let mut chart = LineChart::new(4);
    assert!(chart.take_redraw());

    chart.set_visible(false);
    chart.push_sample(0.5, SystemTime::now());
    chart.push_sample(0.7, SystemTime::now());
    assert!(!chart.needs_redraw());
    assert_eq!(chart.buffer().present_count(), 2);

    chart.set_visible(true);
    assert!(chart.take_redraw());
    assert!(!chart.take_redraw());

    chart.push_gap();
    assert!(chart.needs_redraw());
}

#[test]
fn setters_request_redraws() {
    let mut net = NetworkChart::new(4);
    net.take_redraw();
    net.set_common_scale(true);
    assert!(net.take_redraw());
    net.set_colors(Color::RED, Color::BLUE);
    assert!(net.take_redraw());
    net.on_pointer(PointerEvent::Enter(Point::new(1.0, 1.0)));
    assert!(net.take_redraw());
}

#[test]
fn frozen_bar_ignores_new_levels_until_release() {
    let palette = ChartPalette::dark();
    let env = Env::new(&palette);
    let viewport = Viewport::new(40.0, 64.0);
    let mut bar = BlockBar::new(1);
    bar.push_level(1.0, Some(Color::RED));
    bar.on_pointer(PointerEvent::Press(Point::new(100.0, 100.0)));
    bar.push_level(0.0, None);

    let lit = |cmds: &[PaintCommand]| {
        cmds.iter()
            .filter(|c| matches!(c, PaintCommand::FillRoundedRect { color, .. } if *color == Color::RED))
            .count()
    };
    assert_eq!(lit(&bar.draw(&viewport, &env)), 16);

    bar.on_pointer(PointerEvent::Release);
    assert_eq!(lit(&bar.draw(&viewport, &env)), 0);
}

#[test]
fn theme_palette_flows_into_rendering() {
    let theme = ThemeState::new(ColorScheme::Dark);
    theme.set_color_override(ChartColorToken::Inactive, Color::rgba(0.1, 0.2, 0.3, 0.4));
    let palette = theme.palette();
    let env = Env::new(&palette);

    let mut pie = PieChart::new();
    let cmds = pie.draw(&Viewport::new(30.0, 30.0), &env);
    match &cmds[0] {
        PaintCommand::StrokeArc { style, .. } => {
            assert_eq!(style.color, Color::rgba(0.1, 0.2, 0.3, 0.4))
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_speed_formatter_labels_network_chart() {
    let palette = ChartPalette::dark();
    let bits = |v: f64| format!("{:.0} bit/s", v * 8.0);
    let env = Env::new(&palette).with_speed_formatter(&bits);

    let mut net = NetworkChart::new(2);
    net.set_min_max_labels(true);
    net.push_dual(10.0, 20.0);
    let cmds = net.draw(&Viewport::new(60.0, 30.0), &env);
    let texts: Vec<_> = cmds
        .iter()
        .filter_map(|c| match c {
            PaintCommand::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["80 bit/s", "160 bit/s"]);
}

fn line_values(chart: &LineChart) -> Vec<Option<f64>> {
    chart.buffer().iter().map(Slot::value).collect()
}

fn stroked_vertices(cmds: &[PaintCommand]) -> Vec<Point> {
    cmds.iter()
        .find_map(|c| match c {
            PaintCommand::StrokePath { path, .. } => Some(path.vertices()),
            _ => None,
        })
        .unwrap_or_default()
}

#[test]
fn line_resize_keeps_recent_samples_while_frozen() {
    let palette = ChartPalette::dark();
    let env = Env::new(&palette);
    let viewport = Viewport::new(40.0, 20.0);

    let mut chart = LineChart::new(3);
    for v in [0.1, 0.2, 0.3] {
        chart.push_sample(v, SystemTime::UNIX_EPOCH);
    }
    // below the plot, so no crosshair is drawn
    chart.on_pointer(PointerEvent::Press(Point::new(0.0, 1_000.0)));
    chart.push_sample(0.4, SystemTime::UNIX_EPOCH);

    chart.resize(5);
    assert_eq!(
        line_values(&chart),
        vec![None, None, Some(0.2), Some(0.3), Some(0.4)]
    );
    let frozen = stroked_vertices(&chart.draw(&viewport, &env));
    let xs: Vec<f32> = frozen.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![20.0, 30.0, 40.0]);
    assert!(frozen[2].y.abs() < 1e-4);

    chart.resize(2);
    assert_eq!(line_values(&chart), vec![Some(0.3), Some(0.4)]);
    let frozen = stroked_vertices(&chart.draw(&viewport, &env));
    assert_eq!(frozen.len(), 2);
    // snapshot is [0.2, 0.3]
    assert!((frozen[0].y - 20.0 / 3.0).abs() < 1e-3);
    assert!(chart.is_frozen());

    chart.on_pointer(PointerEvent::Release);
    let live = stroked_vertices(&chart.draw(&viewport, &env));
    // live is [0.3, 0.4]
    assert!((live[0].y - 5.0).abs() < 1e-3);
}

#[test]
fn grid_redimension_keeps_recent_statuses() {
    let mut grid = GridChart::new(2, 2).unwrap();
    for ok in [true, false, true] {
        grid.push_status(ok);
    }
    assert_eq!(
        grid.cells().to_vec(),
        vec![None, Some(true), Some(false), Some(true)]
    );

    grid.set_dimensions(1, 2).unwrap();
    assert_eq!(grid.cells().to_vec(), vec![Some(false), Some(true)]);

    grid.set_dimensions(2, 3).unwrap();
    assert_eq!(
        grid.cells().to_vec(),
        vec![None, None, None, None, Some(false), Some(true)]
    );
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
}

#[test]
fn bar_resize_keeps_recent_columns() {
    let palette = ChartPalette::dark();
    let env = Env::new(&palette);
    let viewport = Viewport::new(40.0, 64.0);
    let fractions = |bar: &BlockBar| -> Vec<f64> {
        bar.columns().iter().map(|l| l.fraction).collect()
    };

    let mut bar = BlockBar::new(3);
    for f in [0.1, 0.2, 0.3] {
        bar.push_level(f, None);
    }
    bar.resize(2);
    assert_eq!(fractions(&bar), vec![0.2, 0.3]);
    bar.resize(4);
    assert_eq!(fractions(&bar), vec![0.0, 0.0, 0.2, 0.3]);

    bar.on_pointer(PointerEvent::Press(Point::new(1_000.0, 1_000.0)));
    bar.push_level(0.9, None);
    bar.resize(1);
    assert_eq!(fractions(&bar), vec![0.9]);
    // frozen snapshot shrinks too: one column of blocks
    assert_eq!(bar.draw(&viewport, &env).len(), 16);
}
