//! RemovePaymentHandler - Command handler for deleting a payment.

use std::sync::Arc;

use crate::domain::foundation::PaymentId;
use crate::domain::ledger::LedgerError;
use crate::ports::LedgerStore;

/// Command to remove one payment record.
#[derive(Debug, Clone)]
pub struct RemovePaymentCommand {
    pub payment_id: PaymentId,
}

/// Handler for removing payments.
pub struct RemovePaymentHandler {
    store: Arc<dyn LedgerStore>,
}

impl RemovePaymentHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RemovePaymentCommand) -> Result<(), LedgerError> {
        self.store.remove_payment(cmd.payment_id).await
    }
}
