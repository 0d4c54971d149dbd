use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per exam slot; (activity, date, start) is the natural key that
    // keeps concurrent generations from duplicating slots
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            activity_id VARCHAR(255) NOT NULL,
            slot_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            capacity_max INTEGER NOT NULL,
            capacity_used INTEGER NOT NULL DEFAULT 0,
            status VARCHAR(32) NOT NULL DEFAULT 'open',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT positive_capacity CHECK (capacity_max > 0),
            CONSTRAINT valid_capacity_used CHECK (capacity_used BETWEEN 0 AND capacity_max),
            CONSTRAINT unique_activity_slot UNIQUE (activity_id, slot_date, start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_slots_activity_id ON slots(activity_id)",
        "CREATE INDEX IF NOT EXISTS idx_slots_slot_date ON slots(slot_date)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
