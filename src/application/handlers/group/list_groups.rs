//! ListGroupsHandler - Query handler for all groups.

use std::sync::Arc;

use crate::domain::ledger::{Group, LedgerError};
use crate::ports::LedgerStore;

#[derive(Debug, Clone, Default)]
pub struct ListGroupsQuery;

pub struct ListGroupsHandler {
    store: Arc<dyn LedgerStore>,
}

impl ListGroupsHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListGroupsQuery) -> Result<Vec<Group>, LedgerError> {
        self.store.list_groups().await
    }
}
