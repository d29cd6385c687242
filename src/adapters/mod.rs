//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - JSON document ledger and backend selection
//! - `sqlite` - Normalized relational ledger
//! - `http` - REST API

pub mod http;
pub mod sqlite;
pub mod storage;

pub use sqlite::{SqliteLedgerStore, SqliteStoreFactory};
pub use storage::{build_store_factory, DocumentLedgerStore, DocumentStoreFactory};
