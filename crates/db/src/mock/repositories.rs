use async_trait::async_trait;
use examplan_core::models::slot::{Slot, SlotDraft};
use examplan_core::store::SlotStore;
use mockall::mock;
use uuid::Uuid;

// Mock slot store for failure-injection tests
mock! {
    pub SlotRepo {}

    #[async_trait]
    impl SlotStore for SlotRepo {
        async fn create_slot(&self, draft: &SlotDraft) -> eyre::Result<Slot>;

        async fn list_slots_by_activity(&self, activity_id: &str) -> eyre::Result<Vec<Slot>>;

        async fn get_slot(&self, id: Uuid) -> eyre::Result<Option<Slot>>;

        async fn delete_slots_by_activity(&self, activity_id: &str) -> eyre::Result<u64>;
    }
}
