use async_trait::async_trait;
use eyre::Result;
use uuid::Uuid;

use crate::models::slot::{Slot, SlotDraft};

/// Persistence seam for exam slots.
///
/// Implementations assign ids and must refuse a second slot with the same
/// `(activity_id, date, start_time)`; the generator relies on that to keep
/// concurrent runs over the same activity from duplicating slots.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Stores a new slot with `capacity_used = 0` and status `Open`.
    async fn create_slot(&self, draft: &SlotDraft) -> Result<Slot>;

    /// All slots of an activity, ordered by date then start time.
    async fn list_slots_by_activity(&self, activity_id: &str) -> Result<Vec<Slot>>;

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>>;

    /// Removes every slot of an activity and returns how many were removed.
    async fn delete_slots_by_activity(&self, activity_id: &str) -> Result<u64>;
}
