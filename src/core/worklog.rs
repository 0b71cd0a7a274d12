//! The work log service: every user operation runs here against an injected
//! store and clock, and is persisted before it returns.

use crate::clock::Clock;
use crate::core::accounting::{WorkedTime, recalculate_all, recompute_entry};
use crate::core::lunch::validate_minutes;
use crate::core::projection::{Projection, project};
use crate::core::weekly::{
    WEEKLY_TARGET_HOURS, WeekGroup, apply_rollover, group_by_week, week_dates, week_start,
    weekly_hours,
};
use crate::errors::{AppError, AppResult};
use crate::store::audit::ttlog;
use crate::store::{DayEntry, Store};
use crate::ui::messages::warning;
use crate::utils::date::{format_date, parse_date_arg};
use crate::utils::time::{format_time, parse_optional_time, truncate_to_minute};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct StartOutcome {
    pub date: NaiveDate,
    pub start: NaiveTime,
    /// `Some(n)` when the new-week rollover removed `n` entries.
    pub rolled_over: Option<usize>,
    /// Set when the day was already ended and got recalculated.
    pub worked: Option<WorkedTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndOutcome {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub worked: WorkedTime,
    pub lunch_minutes: u32,
    pub weekly_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayView {
    pub date: NaiveDate,
    pub entry: Option<DayEntry>,
    pub weekly_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub days: Vec<(NaiveDate, Option<DayEntry>)>,
    pub total_hours: f64,
    pub lunch_minutes: u32,
}

impl WeekView {
    pub fn remaining_hours(&self) -> f64 {
        WEEKLY_TARGET_HOURS - self.total_hours
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllView {
    pub weeks: Vec<WeekGroup>,
    pub total_hours: f64,
    pub lunch_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub date: NaiveDate,
    pub created: bool,
    pub entry: DayEntry,
    pub worked: Option<WorkedTime>,
    pub lunch_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchOutcome {
    pub previous: u32,
    pub minutes: u32,
    pub recalculated: usize,
}

pub struct Worklog {
    store: Store,
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl Worklog {
    /// Load the store at `path`. An unreadable store is reported and replaced
    /// by an empty one; it is only overwritten by the next mutating operation.
    pub fn open(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> AppResult<Self> {
        let path = path.into();

        let store = match Store::load(&path) {
            Ok(store) => store,
            Err(AppError::CorruptStore(reason)) => {
                warn!(path = %path.display(), %reason, "corrupt store reset");
                warning(format!(
                    "Work log {} could not be read ({}). Starting with an empty log.",
                    path.display(),
                    reason
                ));
                Store::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { store, path, clock })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Apply `f` to a copy of the store and persist it. The in-memory store is
    /// only replaced once the write succeeded; on any error it is unchanged.
    fn mutate<T>(&mut self, f: impl FnOnce(&mut Store) -> AppResult<T>) -> AppResult<T> {
        let mut next = self.store.clone();
        let out = f(&mut next)?;
        next.save(&self.path)?;
        self.store = next;
        Ok(out)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.path, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    // ------------------------------------------------
    // LOG START / END
    // ------------------------------------------------

    pub fn log_start(&mut self, time: Option<&str>) -> AppResult<StartOutcome> {
        let now = truncate_to_minute(self.clock.now());
        let date = now.date();
        let start = parse_optional_time(time)?.unwrap_or(now.time());

        let outcome = self.mutate(|store| {
            let rolled_over = apply_rollover(store, date);

            let lunch = store.lunch_minutes();
            let entry = store.entry_or_default(date);
            entry.start = Some(start);
            let worked = recompute_entry(date, entry, lunch);

            Ok(StartOutcome {
                date,
                start,
                rolled_over,
                worked,
            })
        })?;

        if let Some(n) = outcome.rolled_over {
            info!(removed = n, %date, "weekly rollover");
            self.audit(
                "rollover",
                &format_date(date),
                &format!("{} previous entries cleared", n),
            );
        }
        self.audit(
            "start",
            &format_date(date),
            &format!("Work start logged at {}", format_time(start)),
        );

        Ok(outcome)
    }

    pub fn log_end(&mut self, time: Option<&str>) -> AppResult<EndOutcome> {
        let now = truncate_to_minute(self.clock.now());
        let date = now.date();
        let end = parse_optional_time(time)?.unwrap_or(now.time());

        let outcome = self.mutate(|store| {
            // an empty Monday cannot hold a start, so a rollover here always
            // ends in MissingStart and is discarded with the copy
            apply_rollover(store, date);

            let lunch = store.lunch_minutes();
            let missing = || AppError::MissingStart(format_date(date));
            let entry = store.entry_mut(date).ok_or_else(missing)?;
            let start = entry.start.ok_or_else(missing)?;

            entry.end = Some(end);
            let worked = recompute_entry(date, entry, lunch).ok_or_else(missing)?;

            Ok(EndOutcome {
                date,
                start,
                end,
                worked,
                lunch_minutes: lunch,
                weekly_hours: weekly_hours(store, date),
            })
        })?;

        self.audit(
            "end",
            &format_date(date),
            &format!(
                "Work end logged at {} ({} minutes)",
                format_time(end),
                outcome.worked.total_minutes
            ),
        );

        Ok(outcome)
    }

    // ------------------------------------------------
    // VIEWS
    // ------------------------------------------------

    pub fn view_today(&self) -> TodayView {
        let date = self.clock.today();
        TodayView {
            date,
            entry: self.store.entry(date).cloned(),
            weekly_hours: weekly_hours(&self.store, date),
        }
    }

    pub fn view_week(&self) -> WeekView {
        let today = self.clock.today();
        WeekView {
            week_start: week_start(today),
            days: week_dates(today)
                .into_iter()
                .map(|d| (d, self.store.entry(d).cloned()))
                .collect(),
            total_hours: weekly_hours(&self.store, today),
            lunch_minutes: self.store.lunch_minutes(),
        }
    }

    pub fn view_all(&self) -> AllView {
        let weeks = group_by_week(&self.store);
        AllView {
            total_hours: weeks.iter().map(|w| w.total_hours).sum(),
            weeks,
            lunch_minutes: self.store.lunch_minutes(),
        }
    }

    /// The live counter for today's session, if one is running.
    pub fn session(&self) -> Option<Projection> {
        project(&self.store, self.clock.now())
    }

    // ------------------------------------------------
    // EDIT / DELETE
    // ------------------------------------------------

    /// Parse `date` and make sure an entry exists for it.
    pub fn existing_date(&self, date: &str) -> AppResult<NaiveDate> {
        let d = parse_date_arg(date)?;
        if self.store.entry(d).is_none() {
            return Err(AppError::EntryNotFound(format_date(d)));
        }
        Ok(d)
    }

    /// Replace the start and/or end of a day. Blank inputs keep the current
    /// value. A missing day is created only when a new time is given.
    pub fn edit_day(
        &mut self,
        date: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<EditOutcome> {
        let d = parse_date_arg(date)?;
        let new_start = parse_optional_time(start)?;
        let new_end = parse_optional_time(end)?;

        let outcome = self.mutate(|store| {
            let created = store.entry(d).is_none();
            if created && new_start.is_none() && new_end.is_none() {
                return Err(AppError::EntryNotFound(format_date(d)));
            }

            let lunch = store.lunch_minutes();
            let entry = store.entry_or_default(d);

            if let Some(s) = new_start {
                entry.start = Some(s);
            }
            if let Some(e) = new_end {
                if entry.start.is_none() {
                    return Err(AppError::MissingStart(format_date(d)));
                }
                entry.end = Some(e);
            }

            let worked = if new_start.is_some() || new_end.is_some() {
                recompute_entry(d, entry, lunch)
            } else {
                None
            };

            Ok(EditOutcome {
                date: d,
                created,
                entry: entry.clone(),
                worked,
                lunch_minutes: lunch,
            })
        })?;

        self.audit("edit", &format_date(d), &describe_edit(&outcome.entry));
        Ok(outcome)
    }

    pub fn delete_day(&mut self, date: &str) -> AppResult<DayEntry> {
        let d = parse_date_arg(date)?;

        let removed = self.mutate(|store| {
            store
                .remove(d)
                .ok_or_else(|| AppError::EntryNotFound(format_date(d)))
        })?;

        self.audit(
            "del",
            &format_date(d),
            &format!("Entry deleted ({})", describe_edit(&removed)),
        );
        Ok(removed)
    }

    // ------------------------------------------------
    // SETTINGS
    // ------------------------------------------------

    /// Change the lunch break and recalculate every complete entry.
    pub fn configure_lunch(&mut self, minutes: u32) -> AppResult<LunchOutcome> {
        let minutes = validate_minutes(i64::from(minutes))?;

        let outcome = self.mutate(|store| {
            let previous = store.lunch_minutes();
            store.settings.lunch_break_minutes = minutes;
            let recalculated = recalculate_all(store);

            Ok(LunchOutcome {
                previous,
                minutes,
                recalculated,
            })
        })?;

        self.audit(
            "lunch",
            &format!("{} min", minutes),
            &format!(
                "Lunch break {} -> {} minutes, {} entries recalculated",
                outcome.previous, minutes, outcome.recalculated
            ),
        );
        Ok(outcome)
    }
}

fn describe_edit(entry: &DayEntry) -> String {
    let show = |t: Option<NaiveTime>| t.map(format_time).unwrap_or_else(|| "N/A".into());
    format!("{} - {}", show(entry.start), show(entry.end))
}
