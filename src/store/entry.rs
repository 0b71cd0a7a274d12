use super::hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One calendar day of work.
///
/// `hours_worked` and `total_minutes` are derived: they are only present when
/// both `start` and `end` are, and are always rewritten together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub start: Option<NaiveTime>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub end: Option<NaiveTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<i64>,
}

impl DayEntry {
    pub fn started(start: NaiveTime) -> Self {
        Self {
            start: Some(start),
            ..Default::default()
        }
    }

    /// No field recorded at all (an `{}` object in the store).
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.hours_worked.is_none()
            && self.total_minutes.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Started but not yet ended.
    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Hours counted towards totals; a day without derived fields counts 0.
    pub fn hours(&self) -> f64 {
        self.hours_worked.unwrap_or(0.0)
    }

    pub fn clear_derived(&mut self) {
        self.hours_worked = None;
        self.total_minutes = None;
    }
}
