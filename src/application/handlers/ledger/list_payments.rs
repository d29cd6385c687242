//! ListPaymentsHandler - Query handler for the full payment listing.

use std::sync::Arc;

use crate::domain::ledger::{LedgerError, PaymentsByGroup};
use crate::ports::LedgerStore;

/// Query for every payment, grouped by group name.
#[derive(Debug, Clone, Default)]
pub struct ListPaymentsQuery;

pub type ListPaymentsResult = PaymentsByGroup;

pub struct ListPaymentsHandler {
    store: Arc<dyn LedgerStore>,
}

impl ListPaymentsHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListPaymentsQuery) -> Result<ListPaymentsResult, LedgerError> {
        self.store.list_all_payments().await
    }
}
