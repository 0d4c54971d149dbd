use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use examplan_api::config::ApiConfig;
use examplan_core::store::SlotStore;
use examplan_db::{
    create_pool, memory::InMemorySlotStore, repositories::slot::PgSlotStore,
    schema::initialize_database,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ExamPlan API");

    let slot_store: Arc<dyn SlotStore> = match &config.database_url {
        Some(database_url) => {
            // Create database connection pool
            let db_pool = create_pool(database_url).await?;

            // Initialize database schema
            initialize_database(&db_pool).await?;

            Arc::new(PgSlotStore::new(db_pool))
        }
        None => {
            warn!("DATABASE_URL is not set, slots are kept in memory only");
            Arc::new(InMemorySlotStore::new())
        }
    };

    // Start API server
    examplan_api::start_server(config, slot_store).await?;

    Ok(())
}
