/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Day status marker in the weekly view: `✓` when hours were worked, `○` otherwise.
pub fn day_marker(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h > 0.0 => format!("{GREEN}✓{RESET}"),
        _ => format!("{GREY}○{RESET}"),
    }
}

/// Greys out placeholders such as `Not logged` or `N/A`.
pub fn colorize_optional(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => format!("{GREY}{placeholder}{RESET}"),
    }
}

/// Negative worked time is a preserved edge case; make it visible.
pub fn colorize_hours(text: &str, hours: f64) -> String {
    if hours < 0.0 {
        format!("{RED}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn colorize_remaining(text: &str, remaining: f64) -> String {
    if remaining > 0.0 {
        format!("{YELLOW}{text}{RESET}")
    } else {
        format!("{GREEN}{text}{RESET}")
    }
}
