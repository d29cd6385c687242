//! GetNextPaymentHandler - Query handler for next-payer weights.
//!
//! Seeds totals from the ledger, then hands them to the fairness engine.
//! The engine never sees raw records, so either store representation gives
//! the same weights.

use std::sync::Arc;
use tracing::debug;

use crate::domain::aggregation::AggregationView;
use crate::domain::fairness::{FairnessEngine, RoundKind, Weights};
use crate::domain::ledger::{LedgerError, Scope};
use crate::ports::LedgerStore;

use super::ensure_scope_exists;

/// Query for next-payer weights within a scope.
#[derive(Debug, Clone, Default)]
pub struct GetNextPaymentQuery {
    pub scope: Scope,
}

/// Weights plus the policy branch that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct GetNextPaymentResult {
    pub round: RoundKind,
    pub weights: Weights,
}

pub struct GetNextPaymentHandler {
    store: Arc<dyn LedgerStore>,
}

impl GetNextPaymentHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetNextPaymentQuery,
    ) -> Result<GetNextPaymentResult, LedgerError> {
        ensure_scope_exists(self.store.as_ref(), &query.scope).await?;

        let persons = match query.scope {
            Scope::All => self.store.list_persons().await?,
            Scope::Group(_) => Vec::new(),
        };
        let payments = self.store.list_all_payments().await?;

        let totals = AggregationView::totals(&persons, &payments, &query.scope);
        let round = FairnessEngine::classify(&totals);
        let weights = FairnessEngine::weights(&totals);

        debug!(
            scope = ?query.scope,
            round = ?round,
            candidates = weights.len(),
            "Next-payer weights computed"
        );
        Ok(GetNextPaymentResult { round, weights })
    }
}
