//! Storage Adapters
//!
//! Ledger persistence and backend selection.
//!
//! ## Available Adapters
//!
//! - **DocumentLedgerStore** - One JSON document, a ledger per group keyed by person
//! - **SqliteLedgerStore** - Normalized relational schema (see `adapters::sqlite`)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::build_store_factory;
//!
//! let stores = build_store_factory(&config.storage).await?;
//! let store = stores.open();
//! ```

mod document_ledger_store;

pub use document_ledger_store::{DocumentLedgerStore, DocumentStoreFactory};

use std::sync::Arc;
use tracing::info;

use crate::adapters::sqlite::SqliteStoreFactory;
use crate::config::{StorageBackend, StorageConfig};
use crate::domain::ledger::LedgerError;
use crate::ports::LedgerStoreFactory;

/// Builds the store factory selected by configuration.
pub async fn build_store_factory(
    config: &StorageConfig,
) -> Result<Arc<dyn LedgerStoreFactory>, LedgerError> {
    let factory: Arc<dyn LedgerStoreFactory> = match config.backend {
        StorageBackend::Document => {
            let path = config.document_path();
            info!(path = %path.display(), "Using document ledger");
            Arc::new(DocumentStoreFactory::new(path))
        }
        StorageBackend::Relational => {
            tokio::fs::create_dir_all(&config.data_dir)
                .await
                .map_err(|e| {
                    LedgerError::storage(format!(
                        "Failed to create data directory {}: {}",
                        config.data_dir.display(),
                        e
                    ))
                })?;
            let url = config.database_url();
            info!(url = %url, "Using relational ledger");
            Arc::new(SqliteStoreFactory::connect(&url, config.max_connections).await?)
        }
    };
    Ok(factory)
}
