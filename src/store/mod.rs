//! Durable work log store.
//!
//! On disk the store is a single JSON object: one key per `YYYY-MM-DD` date
//! mapping to a [`DayEntry`], plus a sibling `settings` object. In memory the
//! two concerns are kept apart in [`Store`].

pub mod audit;
mod entry;
mod hhmm;

pub use entry::DayEntry;

use crate::core::lunch::MAX_LUNCH_MINUTES;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date, parse_date};
use chrono::NaiveDate;
use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const SETTINGS_KEY: &str = "settings";
pub const DEFAULT_LUNCH_MINUTES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub lunch_break_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lunch_break_minutes: DEFAULT_LUNCH_MINUTES,
        }
    }
}

impl Settings {
    /// Read the `settings` object leniently: a missing, non-integer or
    /// out-of-range lunch break falls back to the default.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let raw = value.get("lunch_break_minutes");

        let lunch = match raw {
            None => DEFAULT_LUNCH_MINUTES,
            Some(v) => match v.as_u64().filter(|m| *m <= u64::from(MAX_LUNCH_MINUTES)) {
                Some(m) => m as u32,
                None => {
                    warn!(value = %v, "invalid lunch_break_minutes in store, using default");
                    DEFAULT_LUNCH_MINUTES
                }
            },
        };

        Self {
            lunch_break_minutes: lunch,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub settings: Settings,
    pub entries: BTreeMap<NaiveDate, DayEntry>,
}

impl Store {
    pub fn lunch_minutes(&self) -> u32 {
        self.settings.lunch_break_minutes
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.entries.get(&date)
    }

    pub fn entry_mut(&mut self, date: NaiveDate) -> Option<&mut DayEntry> {
        self.entries.get_mut(&date)
    }

    pub fn entry_or_default(&mut self, date: NaiveDate) -> &mut DayEntry {
        self.entries.entry(date).or_default()
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<DayEntry> {
        self.entries.remove(&date)
    }

    /// Drop every day entry, keeping the settings. Returns how many were removed.
    pub fn clear_entries(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn from_json(content: &str) -> AppResult<Store> {
        serde_json::from_str(content).map_err(|e| AppError::CorruptStore(e.to_string()))
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store with default settings; content that
    /// cannot be parsed yields [`AppError::CorruptStore`].
    pub fn load(path: &Path) -> AppResult<Store> {
        if !path.exists() {
            debug!(path = %path.display(), "store file not found, starting empty");
            return Ok(Store::default());
        }

        let bytes = fs::read(path)?;
        let content =
            String::from_utf8(bytes).map_err(|e| AppError::CorruptStore(e.to_string()))?;
        Store::from_json(&content)
    }

    /// Rewrite the whole file through a temporary sibling and a rename.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        debug!(path = %path.display(), entries = self.entries.len(), "store flushed");
        Ok(())
    }
}

impl Serialize for Store {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = s.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(SETTINGS_KEY, &self.settings)?;
        for (date, entry) in &self.entries {
            map.serialize_entry(&format_date(*date), entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(d)?;
        let mut store = Store::default();

        for (key, value) in raw {
            if key == SETTINGS_KEY {
                store.settings = Settings::from_value(&value);
                continue;
            }

            let Some(date) = parse_date(&key) else {
                warn!(key = %key, "ignoring unknown key in store");
                continue;
            };

            if !value.is_object() {
                warn!(key = %key, "ignoring non-object entry in store");
                continue;
            }

            let entry = DayEntry::deserialize(value)
                .map_err(|e| <D::Error as de::Error>::custom(format!("entry {key}: {e}")))?;
            store.entries.insert(date, entry);
        }

        Ok(store)
    }
}
