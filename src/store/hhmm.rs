//! Serde adapter storing `Option<NaiveTime>` as an `"HH:MM"` string.

use crate::utils::time::{format_time, parse_time};
use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer, de};

pub fn serialize<S>(value: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(t) => s.serialize_str(&format_time(*t)),
        None => s.serialize_none(),
    }
}

pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(d)?;
    raw.map(|s| parse_time(&s).ok_or_else(|| de::Error::custom(format!("invalid time '{s}'"))))
        .transpose()
}
