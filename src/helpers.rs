use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use colored::Colorize;
use once_cell::sync::Lazy;

pub static SUCCESS: Lazy<colored::ColoredString> = Lazy::new(|| "[taskmgr]".green());
pub static FAIL: Lazy<colored::ColoredString> = Lazy::new(|| "[taskmgr]".red());

/// Current local time as RFC 3339 with second precision.
pub fn timestamp() -> String { Local::now().to_rfc3339_opts(SecondsFormat::Secs, true) }

/// Time elapsed since `millis` (epoch milliseconds), e.g. `3h`.
pub fn format_uptime(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(started) if millis > 0 => format_duration(started),
        _ => "none".to_string(),
    }
}

pub fn format_duration(datetime: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(datetime);

    match duration.num_seconds() {
        s if s >= 86400 => format!("{}d", s / 86400),
        s if s >= 3600 => format!("{}h", s / 3600),
        s if s >= 60 => format!("{}m", s / 60),
        s => format!("{}s", s.max(0)),
    }
}

pub fn format_memory(bytes: u64) -> String {
    const UNIT: f64 = 1024.0;
    const SUFFIX: [&str; 5] = ["b", "kb", "mb", "gb", "tb"];

    let size = bytes as f64;
    if size <= 0.0 {
        return "0b".to_string();
    }

    let base = (size.log10() / UNIT.log10()).min((SUFFIX.len() - 1) as f64);
    let mut buffer = ryu::Buffer::new();
    let result = buffer.format((UNIT.powf(base - base.floor()) * 10.0).round() / 10.0).trim_end_matches(".0");

    [result, SUFFIX[base.floor() as usize]].join("")
}
