//! Formatting of hours and lunch durations for terminal output.

/// Lunch break as a human phrase: `45 minutes`, `1h 15m`.
pub fn describe_lunch(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{} minutes", mins)
    }
}

/// Short lunch form used inside the counter line: `30m`, `1h 0m`.
pub fn describe_lunch_short(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Hours with two decimals, as shown in weekly totals.
pub fn hours2(h: f64) -> String {
    format!("{:.2}", h)
}

/// Hours the way a stored entry prints them: `7.5`, `7.0`, `-0.25`.
pub fn hours_plain(h: f64) -> String {
    let s = format!("{}", h);
    if s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{}.0", s)
    }
}
