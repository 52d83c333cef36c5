use std::time::{SystemTime, UNIX_EPOCH};

/// Turns a bytes-per-second reading into a label.
///
/// Any `Fn(f64) -> String` qualifies, so hosts can pass a closure.
pub trait SpeedFormatter {
    fn format_speed(&self, bytes_per_sec: f64) -> String;
}

impl<F> SpeedFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format_speed(&self, bytes_per_sec: f64) -> String {
        self(bytes_per_sec)
    }
}

/// Tooltip value label: up to three decimals, or a K/M/B suffix with two.
pub fn format_compact(value: f64) -> String {
    const SUFFIXES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    match SUFFIXES.iter().find(|(unit, _)| value.abs() >= *unit) {
        Some((unit, suffix)) => format!("{}{suffix}", trim_fraction(format!("{:.2}", value / unit))),
        None => trim_fraction(format!("{value:.3}")),
    }
}

fn trim_fraction(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Default network speed label, decimal units.
pub fn format_speed(bytes_per_sec: f64) -> String {
    const KB: f64 = 1_000.0;
    const MB: f64 = KB * 1_000.0;
    const GB: f64 = MB * 1_000.0;

    if !bytes_per_sec.is_finite() || bytes_per_sec <= 0.0 {
        return "0 B/s".to_string();
    }
    if bytes_per_sec >= GB {
        format!("{:.1} GB/s", bytes_per_sec / GB)
    } else if bytes_per_sec >= MB {
        format!("{:.1} MB/s", bytes_per_sec / MB)
    } else if bytes_per_sec >= KB {
        format!("{:.0} KB/s", bytes_per_sec / KB)
    } else {
        format!("{bytes_per_sec:.0} B/s")
    }
}

/// `0.55` -> `"55%"`. Out-of-range fractions are clamped.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "0%".to_string();
    }
    format!("{:.0}%", (fraction.clamp(0.0, 1.0) * 100.0).round())
}

pub fn format_hms(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--:--".to_string();
    }
    let total = seconds.round() as i64;
    let sec = total.rem_euclid(60);
    let min_total = total.div_euclid(60);
    let min = min_total.rem_euclid(60);
    let hour = min_total.div_euclid(60);
    format!("{hour:02}:{min:02}:{sec:02}")
}

/// UTC time of day of a timestamp, `HH:MM:SS`.
pub fn format_time_of_day(t: SystemTime) -> String {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => format_hms((d.as_secs() % 86_400) as f64),
        Err(_) => "--:--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn compact_uses_suffixes() {
        assert_eq!(format_compact(12_400.0), "12.4K");
        assert_eq!(format_compact(2_000_000.0), "2M");
        assert_eq!(format_compact(0.5), "0.5");
        assert_eq!(format_compact(-1_250.0), "-1.25K");
        assert_eq!(format_compact(3_000_000_000.0), "3B");
        assert_eq!(format_compact(120.0), "120");
        assert_eq!(format_compact(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn speed_picks_unit() {
        assert_eq!(format_speed(0.0), "0 B/s");
        assert_eq!(format_speed(512.0), "512 B/s");
        assert_eq!(format_speed(12_400.0), "12 KB/s");
        assert_eq!(format_speed(3_300_000.0), "3.3 MB/s");
        assert_eq!(format_speed(1.5e9), "1.5 GB/s");
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(format_percent(0.55), "55%");
        assert_eq!(format_percent(0.004), "0%");
        assert_eq!(format_percent(1.7), "100%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }

    #[test]
    fn hms_formats_expected() {
        assert_eq!(format_hms(3661.0), "01:01:01");
    }

    #[test]
    fn time_of_day_wraps_at_midnight() {
        let t = UNIX_EPOCH + Duration::from_secs(3 * 86_400 + 45_296);
        assert_eq!(format_time_of_day(t), "12:34:56");
    }

    #[test]
    fn closures_are_speed_formatters() {
        let f = |v: f64| format!("{v}bps");
        assert_eq!(f.format_speed(8.0), "8bps");
    }
}
