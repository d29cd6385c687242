//! RecordPaymentHandler - Command handler for appending a payment.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::Money;
use crate::domain::ledger::{LedgerError, NewPayment, PaymentRecord};
use crate::ports::LedgerStore;

/// Command to record a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub name: String,
    /// Falls back to the handler's default group when absent.
    pub group: Option<String>,
    pub amount: Money,
    pub time: String,
}

/// Result of a recorded payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentResult {
    pub record: PaymentRecord,
}

/// Handler for recording payments.
pub struct RecordPaymentHandler {
    store: Arc<dyn LedgerStore>,
    default_group: String,
}

impl RecordPaymentHandler {
    pub fn new(store: Arc<dyn LedgerStore>, default_group: impl Into<String>) -> Self {
        Self {
            store,
            default_group: default_group.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordPaymentCommand,
    ) -> Result<RecordPaymentResult, LedgerError> {
        let group = match cmd.group {
            Some(group) if !group.trim().is_empty() => group,
            _ => self.default_group.clone(),
        };

        let payment = NewPayment::new(cmd.name, group, cmd.amount, cmd.time).map_err(|e| {
            warn!(error = %e, "Rejected payment");
            LedgerError::from(e)
        })?;

        let record = self.store.record_payment(&payment).await?;
        Ok(RecordPaymentResult { record })
    }
}
