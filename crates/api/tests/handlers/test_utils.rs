use std::collections::BTreeSet;
use std::sync::Arc;

use axum_test::TestServer;
use examplan_api::{app, ApiState};
use examplan_core::store::SlotStore;
use examplan_db::memory::InMemorySlotStore;
use serde_json::{json, Value};

pub struct TestContext {
    pub store: Arc<InMemorySlotStore>,
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemorySlotStore::new());
        let server = server_with(store.clone());
        Self { store, server }
    }

    /// Same as [`TestContext::new`] with a custom per-request slot limit.
    pub fn with_max_slots(max_slots: u64) -> Self {
        let store = Arc::new(InMemorySlotStore::new());
        let server = TestServer::new(app(ApiState::with_max_slots(store.clone(), max_slots)))
            .expect("Failed to start test server");
        Self { store, server }
    }
}

/// Builds a test server over any store implementation.
pub fn server_with(store: Arc<dyn SlotStore>) -> TestServer {
    TestServer::new(app(ApiState::new(store))).expect("Failed to start test server")
}

/// Monday 2024-05-06 to Friday 2024-05-10, 09:00-12:00, one-hour slots.
pub fn planning_body(activity_id: &str) -> Value {
    json!({
        "targetActivityId": activity_id,
        "rangeStart": "2024-05-06",
        "rangeEnd": "2024-05-10",
        "slotDurationMinutes": 60,
        "pauseMinutes": 0,
        "dayWindowStart": "09:00",
        "dayWindowEnd": "12:00",
        "allowedWeekdays": BTreeSet::from([1, 2, 3, 4, 5]),
        "capacityPerSlot": 4
    })
}
