/// Formats a duration or offset in minutes as `m:ss`, rounding to the
/// nearest second. `9.5` becomes `"9:30"`, `0.25` becomes `"0:15"`.
pub fn format_clock(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round() as i64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Formats a resolved temperature range for display. A single target
/// temperature prints alone; the terminal marker has none and prints empty.
pub fn format_temperature(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{}-{}°C", trim_degrees(min), trim_degrees(max)),
        (Some(min), None) => format!("{}°C", trim_degrees(min)),
        (None, _) => String::new(),
    }
}

fn trim_degrees(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
