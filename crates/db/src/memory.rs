//! In-process [`SlotStore`] used when no database is configured, and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::{bail, Result};
use examplan_core::models::slot::{Slot, SlotDraft};
use examplan_core::store::SlotStore;
use tokio::sync::RwLock;
use uuid::Uuid;

type SlotKey = (String, NaiveDate, NaiveTime);

/// Slots keyed by `(activity_id, date, start_time)`, so iteration order is
/// already the listing order within an activity.
#[derive(Default)]
pub struct InMemorySlotStore {
    slots: RwLock<BTreeMap<SlotKey, Slot>>,
}

impl InMemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl SlotStore for InMemorySlotStore {
    async fn create_slot(&self, draft: &SlotDraft) -> Result<Slot> {
        let key = (draft.activity_id.clone(), draft.date, draft.start_time);
        let mut slots = self.slots.write().await;

        if slots.contains_key(&key) {
            bail!(
                "Slot already exists for activity {} on {} at {}",
                draft.activity_id,
                draft.date,
                draft.start_time
            );
        }

        let slot = Slot::from_draft(Uuid::new_v4(), draft, Utc::now());
        slots.insert(key, slot.clone());
        Ok(slot)
    }

    async fn list_slots_by_activity(&self, activity_id: &str) -> Result<Vec<Slot>> {
        let slots = self.slots.read().await;
        Ok(slots
            .values()
            .filter(|slot| slot.activity_id == activity_id)
            .cloned()
            .collect())
    }

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>> {
        let slots = self.slots.read().await;
        Ok(slots.values().find(|slot| slot.id == id).cloned())
    }

    async fn delete_slots_by_activity(&self, activity_id: &str) -> Result<u64> {
        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|(activity, _, _), _| activity != activity_id);
        let deleted = (before - slots.len()) as u64;
        tracing::debug!("Deleted {} slots for activity {}", deleted, activity_id);
        Ok(deleted)
    }
}
