use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{Report, Result};
use examplan_core::models::slot::Slot;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub activity_id: String,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity_max: i32,
    pub capacity_used: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbSlot> for Slot {
    type Error = Report;

    fn try_from(row: DbSlot) -> Result<Self> {
        Ok(Slot {
            id: row.id,
            activity_id: row.activity_id,
            date: row.slot_date,
            start_time: row.start_time,
            end_time: row.end_time,
            capacity_max: row.capacity_max,
            capacity_used: row.capacity_used,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}
