use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_of_day;

/// Booking state of an exam slot.
///
/// Slots are always created `Open`. Every later transition belongs to the
/// booking and attendance workflows; [`SlotStatus::can_transition_to`] is the
/// single table they share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Open,
    Full,
    InProgress,
    Closed,
    Cancelled,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 5] = [
        SlotStatus::Open,
        SlotStatus::Full,
        SlotStatus::InProgress,
        SlotStatus::Closed,
        SlotStatus::Cancelled,
    ];

    /// Storage code, also used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Open => "open",
            SlotStatus::Full => "full",
            SlotStatus::InProgress => "in_progress",
            SlotStatus::Closed => "closed",
            SlotStatus::Cancelled => "cancelled",
        }
    }

    /// Label shown to operators.
    pub fn label(self) -> &'static str {
        match self {
            SlotStatus::Open => "Disponible",
            SlotStatus::Full => "Complet",
            SlotStatus::InProgress => "En cours",
            SlotStatus::Closed => "Fermé",
            SlotStatus::Cancelled => "Annulé",
        }
    }

    pub fn is_bookable(self) -> bool {
        self == SlotStatus::Open
    }

    pub fn can_transition_to(self, next: SlotStatus) -> bool {
        use SlotStatus::*;

        matches!(
            (self, next),
            (Open, Full | InProgress | Cancelled)
                | (Full, Open | InProgress | Cancelled)
                | (InProgress, Closed)
        )
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| eyre::eyre!("Unknown slot status: {}", s))
    }
}

/// A slot computed by the generator, not yet handed to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDraft {
    pub activity_id: String,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    pub capacity_max: i32,
}

/// A persisted exam slot ("créneau").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Uuid,
    pub activity_id: String,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    pub capacity_max: i32,
    pub capacity_used: i32,
    pub status: SlotStatus,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    /// Materializes a draft the way every store creates slots: empty and open.
    pub fn from_draft(id: Uuid, draft: &SlotDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            activity_id: draft.activity_id.clone(),
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            capacity_max: draft.capacity_max,
            capacity_used: 0,
            status: SlotStatus::Open,
            created_at,
        }
    }

    pub fn remaining_capacity(&self) -> i32 {
        (self.capacity_max - self.capacity_used).max(0)
    }
}
