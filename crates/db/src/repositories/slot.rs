use crate::models::DbSlot;
use async_trait::async_trait;
use chrono::Utc;
use eyre::{eyre, Result};
use examplan_core::models::slot::{Slot, SlotDraft, SlotStatus};
use examplan_core::store::SlotStore;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_slot(pool: &Pool<Postgres>, draft: &SlotDraft) -> Result<DbSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slots (id, activity_id, slot_date, start_time, end_time, capacity_max, capacity_used, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, 0, $7, $8)
        ON CONFLICT (activity_id, slot_date, start_time) DO NOTHING
        RETURNING id, activity_id, slot_date, start_time, end_time, capacity_max, capacity_used, status, created_at
        "#,
    )
    .bind(id)
    .bind(&draft.activity_id)
    .bind(draft.date)
    .bind(draft.start_time)
    .bind(draft.end_time)
    .bind(draft.capacity_max)
    .bind(SlotStatus::Open.as_str())
    .bind(now)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| {
        eyre!(
            "Slot already exists for activity {} on {} at {}",
            draft.activity_id,
            draft.date,
            draft.start_time
        )
    })?;

    Ok(slot)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, activity_id, slot_date, start_time, end_time, capacity_max, capacity_used, status, created_at
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

pub async fn get_slots_by_activity_id(
    pool: &Pool<Postgres>,
    activity_id: &str,
) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, activity_id, slot_date, start_time, end_time, capacity_max, capacity_used, status, created_at
        FROM slots
        WHERE activity_id = $1
        ORDER BY slot_date ASC, start_time ASC
        "#,
    )
    .bind(activity_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn delete_slots_by_activity_id(pool: &Pool<Postgres>, activity_id: &str) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM slots
        WHERE activity_id = $1
        "#,
    )
    .bind(activity_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// [`SlotStore`] backed by the `slots` table.
#[derive(Clone)]
pub struct PgSlotStore {
    pool: Pool<Postgres>,
}

impl PgSlotStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn create_slot(&self, draft: &SlotDraft) -> Result<Slot> {
        create_slot(&self.pool, draft).await?.try_into()
    }

    async fn list_slots_by_activity(&self, activity_id: &str) -> Result<Vec<Slot>> {
        get_slots_by_activity_id(&self.pool, activity_id)
            .await?
            .into_iter()
            .map(Slot::try_from)
            .collect()
    }

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>> {
        get_slot_by_id(&self.pool, id)
            .await?
            .map(Slot::try_from)
            .transpose()
    }

    async fn delete_slots_by_activity(&self, activity_id: &str) -> Result<u64> {
        let deleted = delete_slots_by_activity_id(&self.pool, activity_id).await?;
        tracing::debug!("Deleted {} slots for activity {}", deleted, activity_id);
        Ok(deleted)
    }
}
