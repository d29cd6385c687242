//! GetDisplayDataHandler - Query handler for per-person summaries.

use std::sync::Arc;
use tracing::debug;

use crate::domain::aggregation::{AggregationView, DisplayData};
use crate::domain::ledger::{LedgerError, Scope};
use crate::ports::LedgerStore;

use super::ensure_scope_exists;

/// Query for display data within a scope.
#[derive(Debug, Clone, Default)]
pub struct GetDisplayDataQuery {
    pub scope: Scope,
}

pub type GetDisplayDataResult = DisplayData;

/// Handler producing `name -> (total, count)` summaries.
pub struct GetDisplayDataHandler {
    store: Arc<dyn LedgerStore>,
}

impl GetDisplayDataHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetDisplayDataQuery,
    ) -> Result<GetDisplayDataResult, LedgerError> {
        ensure_scope_exists(self.store.as_ref(), &query.scope).await?;

        let payments = self.store.list_all_payments().await?;
        let data = AggregationView::display_data(&payments, &query.scope);
        debug!(scope = ?query.scope, persons = data.len(), "Display data computed");
        Ok(data)
    }
}
