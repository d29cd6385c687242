//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::sqlite::SqliteStoreFactory;
use crate::domain::foundation::{GroupId, PaymentId};
use crate::domain::ledger::{
    Group, LedgerError, NewPayment, PaymentRecord, PaymentsByGroup, Person,
};
use crate::ports::{LedgerStore, LedgerStoreFactory};

/// Fresh in-memory relational ledger.
pub async fn ledger() -> Arc<dyn LedgerStore> {
    SqliteStoreFactory::in_memory().await.unwrap().open()
}

pub async fn pay(store: &Arc<dyn LedgerStore>, person: &str, group: &str, amount: f64, time: &str) {
    let payment = NewPayment::from_decimal(person, group, amount, time).unwrap();
    store.record_payment(&payment).await.unwrap();
}

// ════════════════════════════════════════════════════════════════════════════
// Failing store
// ════════════════════════════════════════════════════════════════════════════

pub struct FailingLedgerStore;

fn unavailable<T>() -> Result<T, LedgerError> {
    Err(LedgerError::storage("Simulated storage failure"))
}

#[async_trait]
impl LedgerStore for FailingLedgerStore {
    async fn create_group(&self, _name: &str) -> Result<Group, LedgerError> {
        unavailable()
    }

    async fn get_group(&self, _id: GroupId) -> Result<Group, LedgerError> {
        unavailable()
    }

    async fn find_group_by_name(&self, _name: &str) -> Result<Option<Group>, LedgerError> {
        unavailable()
    }

    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        unavailable()
    }

    async fn rename_group(&self, _id: GroupId, _new_name: &str) -> Result<Group, LedgerError> {
        unavailable()
    }

    async fn remove_group(&self, _id: GroupId) -> Result<(), LedgerError> {
        unavailable()
    }

    async fn record_payment(&self, _payment: &NewPayment) -> Result<PaymentRecord, LedgerError> {
        unavailable()
    }

    async fn remove_payment(&self, _id: PaymentId) -> Result<(), LedgerError> {
        unavailable()
    }

    async fn list_persons(&self) -> Result<Vec<Person>, LedgerError> {
        unavailable()
    }

    async fn list_all_payments(&self) -> Result<PaymentsByGroup, LedgerError> {
        unavailable()
    }
}
