//! Serde helpers for times of day written as `"HH:MM"`.
//!
//! Input also accepts `"HH:MM:00"`; planning works to the minute, so a
//! non-zero seconds field is refused. Output is always `"HH:MM"`.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer, de::Error};

const FORMAT: &str = "%H:%M";
const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid time of day: {raw:?}")))
}

/// Parses `"HH:MM"` or `"HH:MM:00"`.
pub fn parse(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, FORMAT_WITH_SECONDS))
        .ok()
        .filter(|time| time.second() == 0 && time.nanosecond() == 0)
}

/// Whole minutes elapsed since midnight. Seconds are ignored.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Inverse of [`minute_of_day`]; `None` at or past 24:00.
pub fn from_minute_of_day(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}
