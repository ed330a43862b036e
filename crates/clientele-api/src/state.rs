//! Application state wiring the customer service to its storage.
//!
//! `CustomerService` is generic over the repository trait; AppState pins it
//! to the SQLite implementation. Used by both CLI commands and REST handlers.

use std::path::Path;
use std::sync::Arc;

use clientele_core::service::customer::CustomerService;
use clientele_infra::sqlite::customer::SqliteCustomerRepository;
use clientele_infra::sqlite::pool::DatabasePool;

/// Customer service pinned to the SQLite repository.
pub type ConcreteCustomerService = CustomerService<SqliteCustomerRepository>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<ConcreteCustomerService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the database (running migrations) and wire services.
    pub async fn init(database_url: &str, data_dir: &Path) -> anyhow::Result<Self> {
        // The default database file lives in the data directory
        tokio::fs::create_dir_all(data_dir).await?;

        let db_pool = DatabasePool::new(database_url).await?;

        Ok(Self::from_pool(db_pool))
    }

    /// Wire services on top of an already-open pool.
    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let repo = SqliteCustomerRepository::new(db_pool.clone());
        Self {
            customer_service: Arc::new(CustomerService::new(repo)),
            db_pool,
        }
    }
}
