//! Human-readable output of the work log operations.

use crate::core::accounting::WorkedTime;
use crate::core::projection::{Countdown, Projection, TargetLine};
use crate::core::weekly::WEEKLY_TARGET_HOURS;
use crate::core::worklog::{
    AllView, EditOutcome, EndOutcome, LunchOutcome, StartOutcome, TodayView, WeekView,
};
use crate::store::{DayEntry, Store};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{colorize_hours, colorize_optional, colorize_remaining, day_marker};
use crate::utils::date::{format_date, weekday_name};
use crate::utils::formatting::{describe_lunch, describe_lunch_short, hours2, hours_plain};
use crate::utils::time::{format_time, split_hm};
use chrono::{NaiveDate, NaiveTime};

fn opt_time(t: Option<NaiveTime>) -> Option<String> {
    t.map(format_time)
}

fn lunch_deduction_line(lunch: u32) {
    if lunch > 0 {
        println!("({} deducted for lunch break)", describe_lunch(lunch));
    } else {
        println!("(no lunch break deducted)");
    }
}

fn worked_line(prefix: &str, worked: &WorkedTime) {
    let text = format!(
        "{}: {:.2} hours ({} minutes)",
        prefix,
        worked.total_minutes as f64 / 60.0,
        worked.total_minutes
    );
    println!("{}", colorize_hours(&text, worked.hours_worked));
}

fn weekly_total_line(weekly: f64) {
    println!(
        "Weekly total: {}/{} hours",
        hours2(weekly),
        WEEKLY_TARGET_HOURS
    );
}

pub fn start(o: &StartOutcome) {
    if o.rolled_over.is_some() {
        info("🗑️  Previous work log entries cleared for new week.");
    }
    success(format!(
        "Work start logged: {} {}",
        format_date(o.date),
        format_time(o.start)
    ));
    if let Some(w) = &o.worked {
        worked_line("Hours worked recalculated", w);
    }
}

pub fn end(o: &EndOutcome) {
    success(format!(
        "Work end logged: {} {}",
        format_date(o.date),
        format_time(o.end)
    ));
    worked_line("Hours worked", &o.worked);
    lunch_deduction_line(o.lunch_minutes);
    weekly_total_line(o.weekly_hours);
}

pub fn today(v: &TodayView) {
    let Some(entry) = &v.entry else {
        info(format!("No work log found for today ({})", format_date(v.date)));
        return;
    };

    header(format!("Work Log for {}", format_date(v.date)));
    println!("Start: {}", colorize_optional(opt_time(entry.start), "Not logged"));
    println!("End: {}", colorize_optional(opt_time(entry.end), "Not logged"));
    if let Some(h) = entry.hours_worked {
        println!(
            "Hours worked: {}",
            colorize_hours(&format!("{} hours", hours_plain(h)), h)
        );
    }
    weekly_total_line(v.weekly_hours);
    println!();
}

fn lunch_setting_line(label: &str, disabled: &str, lunch: u32) {
    if lunch > 0 {
        println!("{}: {}", label, describe_lunch(lunch));
    } else {
        println!("{}", disabled);
    }
}

pub fn week(v: &WeekView) {
    header(format!("Work Log for Week of {}", format_date(v.week_start)));

    for (date, entry) in &v.days {
        match entry {
            Some(e) => println!(
                "{} {} ({}): {} hours",
                day_marker(Some(e.hours())),
                weekday_name(*date),
                format_date(*date),
                hours_plain(e.hours())
            ),
            None => println!(
                "{} {} ({}): No log",
                day_marker(None),
                weekday_name(*date),
                format_date(*date)
            ),
        }
    }

    println!(
        "\nTotal hours this week: {}/{} hours",
        hours2(v.total_hours),
        WEEKLY_TARGET_HOURS
    );
    let remaining = v.remaining_hours();
    if remaining > 0.0 {
        println!(
            "{}",
            colorize_remaining(
                &format!("Remaining to reach 35h: {} hours", hours2(remaining)),
                remaining
            )
        );
    } else {
        success("Weekly target of 35 hours reached!");
    }

    lunch_setting_line("Lunch break setting", "Lunch break: Disabled", v.lunch_minutes);
    println!();
}

fn entry_row(date: &NaiveDate, e: &DayEntry) -> String {
    format!(
        "{}: {} - {} ({} hours)",
        format_date(*date),
        colorize_optional(opt_time(e.start), "N/A"),
        colorize_optional(opt_time(e.end), "N/A"),
        hours_plain(e.hours())
    )
}

pub fn all(v: &AllView) {
    if v.weeks.is_empty() {
        info("No work logs found.");
        return;
    }

    header("All Work Logs");
    for w in &v.weeks {
        println!("\n  Week of {}:", format_date(w.week_start));
        for (date, e) in &w.days {
            println!("    {}", entry_row(date, e));
        }
        println!(
            "    Week total: {}/{} hours",
            hours2(w.total_hours),
            WEEKLY_TARGET_HOURS
        );
    }

    println!("\nTotal hours logged: {} hours", hours2(v.total_hours));
    lunch_setting_line(
        "Current lunch break setting",
        "Current lunch break setting: Disabled",
        v.lunch_minutes,
    );
    println!();
}

/// List of stored days shown before edit/delete prompts.
pub fn available_dates(store: &Store) {
    println!("Available dates:");
    for (date, e) in &store.entries {
        println!("  {}", entry_row(date, e));
    }
}

pub fn edit(o: &EditOutcome) {
    if o.created {
        info(format!("Created new entry for {}", format_date(o.date)));
    }
    if let Some(w) = &o.worked {
        worked_line("Hours worked recalculated", w);
        lunch_deduction_line(o.lunch_minutes);
    }
    success(format!("Changes saved for {}", format_date(o.date)));
}

pub fn lunch(o: &LunchOutcome) {
    if o.minutes == 0 {
        success("Lunch break disabled (0 minutes)");
    } else {
        success(format!(
            "Lunch break updated to {}h {}m ({} minutes)",
            o.minutes / 60,
            o.minutes % 60,
            o.minutes
        ));
    }
    if o.recalculated > 0 {
        info(format!(
            "📊 Recalculated {} entries with new lunch break duration.",
            o.recalculated
        ));
    }
}

fn countdown(c: &Countdown) -> String {
    format!("{:02}:{:02}", c.hours(), c.mins())
}

/// The live counter shown above the menu while a session is running.
pub fn session(p: &Projection) {
    let (eh, em) = split_hm(p.elapsed_minutes);
    let (wh, wm) = split_hm(p.worked_minutes);

    println!("\n🕐 WORK SESSION ACTIVE");
    println!("Started: {}", format_time(p.start));
    println!("Elapsed: {}h {}m", eh, em);

    if p.worked_minutes > 0 {
        let suffix = if p.lunch_minutes == 0 {
            " (no lunch break)".to_string()
        } else if p.lunch_deducted() {
            format!(" ({} lunch break deducted)", describe_lunch_short(p.lunch_minutes))
        } else {
            format!(" ({} lunch break will be deducted)", describe_lunch_short(p.lunch_minutes))
        };
        println!("Work time: {}h {}m{}", wh, wm, suffix);
    }

    println!(
        "📅 Weekly hours: {:.1}/35h (remaining: {:.1}h)",
        p.weekly_hours, p.remaining_weekly_hours
    );

    for line in p.target_lines() {
        match line {
            TargetLine::WeeklyReached => {
                println!("🎯 WEEKLY TARGET REACHED! You've completed 35+ hours this week")
            }
            TargetLine::DailyReached => {
                println!("🎯 DAILY TARGET REACHED! You've completed 7+ hours today")
            }
            TargetLine::Daily(c) => println!(
                "🎯 Daily (7h): Leave at {} (in {})",
                format_time(c.at),
                countdown(&c)
            ),
            TargetLine::Weekly(c) if p.daily_target_reached => println!(
                "📅 For 35h week: Leave at {} (in {})",
                format_time(c.at),
                countdown(&c)
            ),
            TargetLine::Weekly(c) => println!(
                "📅 Weekly (35h): Leave at {} (in {})",
                format_time(c.at),
                countdown(&c)
            ),
            TargetLine::WeeklyAlreadyReached => {
                println!("📅 Weekly (35h): Target already reached this week!")
            }
        }
    }
    println!();
}
