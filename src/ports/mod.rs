//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `LedgerStore` - Persons, groups and payment records
//! - `LedgerStoreFactory` - Per-request construction of `LedgerStore` handles

mod ledger_store;

pub use ledger_store::{LedgerStore, LedgerStoreFactory};
