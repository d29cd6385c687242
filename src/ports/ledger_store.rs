//! Ledger Store Port - durable storage of persons, groups and payments.
//!
//! Two adapters implement this contract: a JSON document ledger and a
//! normalized SQLite ledger. Callers must not be able to tell them apart.
//!
//! # Atomicity
//!
//! Every mutating operation either commits completely or leaves the ledger
//! untouched. Implementations serialize concurrent writers themselves.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{GroupId, PaymentId};
use crate::domain::ledger::{Group, LedgerError, NewPayment, PaymentRecord, PaymentsByGroup, Person};

/// Port for ledger persistence.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Create an empty group.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if the name is taken
    /// - `Validation` if the name is blank
    async fn create_group(&self, name: &str) -> Result<Group, LedgerError>;

    /// # Errors
    ///
    /// - `GroupNotFound` if the id does not exist
    async fn get_group(&self, id: GroupId) -> Result<Group, LedgerError>;

    /// Look up a group by its exact name.
    async fn find_group_by_name(&self, name: &str) -> Result<Option<Group>, LedgerError>;

    /// All groups, ordered by id.
    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError>;

    /// # Errors
    ///
    /// - `GroupNotFound` if the id does not exist
    /// - `Duplicate` if another group already uses `new_name`
    async fn rename_group(&self, id: GroupId, new_name: &str) -> Result<Group, LedgerError>;

    /// Remove a group together with all of its payments.
    ///
    /// Persons stay in the ledger even when they have no payments left.
    async fn remove_group(&self, id: GroupId) -> Result<(), LedgerError>;

    /// Append a payment, creating its person and group on first use.
    async fn record_payment(&self, payment: &NewPayment) -> Result<PaymentRecord, LedgerError>;

    /// # Errors
    ///
    /// - `PaymentNotFound` if the id does not exist
    async fn remove_payment(&self, id: PaymentId) -> Result<(), LedgerError>;

    /// All known persons, ordered by id.
    async fn list_persons(&self) -> Result<Vec<Person>, LedgerError>;

    /// Every payment, keyed by group name, each history sorted by time.
    ///
    /// Groups without payments are absent.
    async fn list_all_payments(&self) -> Result<PaymentsByGroup, LedgerError>;
}

/// Opens a fresh store handle per request.
///
/// Handles are cheap: they share the connection pool or writer lock owned
/// by the factory and carry no other state.
pub trait LedgerStoreFactory: Send + Sync {
    fn open(&self) -> Arc<dyn LedgerStore>;

    /// Short name of the backing representation, for logs.
    fn backend_name(&self) -> &'static str;
}
