use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::slot::{Slot, SlotDraft};
use super::time_of_day;

/// Constraints describing how to auto-generate slots for one exam activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRequest {
    /// Opaque activity reference, copied onto every slot.
    pub target_activity_id: String,
    pub range_start: NaiveDate,
    /// Inclusive.
    pub range_end: NaiveDate,
    pub slot_duration_minutes: i64,
    #[serde(default)]
    pub pause_minutes: i64,
    #[serde(with = "time_of_day")]
    pub day_window_start: NaiveTime,
    #[serde(with = "time_of_day")]
    pub day_window_end: NaiveTime,
    /// 0=Sunday..6=Saturday.
    pub allowed_weekdays: BTreeSet<u8>,
    pub capacity_per_slot: i32,
}

/// A slot the store refused, with the store's reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSlot {
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningResult {
    pub slots_created: Vec<Slot>,
    #[serde(default)]
    pub failed: Vec<FailedSlot>,
    pub total_slot_count: usize,
    pub total_capacity: i64,
}

impl PlanningResult {
    /// True when at least one computed slot could not be stored.
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Outcome of a dry run: the slots a generation would create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningPreview {
    pub slots: Vec<SlotDraft>,
    pub total_slot_count: usize,
    pub total_capacity: i64,
}
