//! SQLite adapters - normalized relational ledger.
//!
//! - `SqliteLedgerStore` - `LedgerStore` over a shared connection pool
//! - `SqliteStoreFactory` - owns the pool and applies the schema

mod ledger_store;

pub use ledger_store::{SqliteLedgerStore, SqliteStoreFactory};
