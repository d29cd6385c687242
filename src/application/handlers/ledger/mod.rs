//! Ledger handlers.
//!
//! ## Commands
//! - Recording a payment (person and group created on first use)
//! - Removing a payment
//!
//! ## Queries
//! - Full payment listing, grouped and ordered
//! - Display data (per-person totals and counts)
//! - Next-payer weights

mod get_display_data;
mod get_next_payment;
mod list_payments;
mod record_payment;
mod remove_payment;

use crate::domain::ledger::{LedgerError, Scope};
use crate::ports::LedgerStore;

// Commands
pub use record_payment::{RecordPaymentCommand, RecordPaymentHandler, RecordPaymentResult};
pub use remove_payment::{RemovePaymentCommand, RemovePaymentHandler};

// Queries
pub use get_display_data::{GetDisplayDataHandler, GetDisplayDataQuery, GetDisplayDataResult};
pub use get_next_payment::{GetNextPaymentHandler, GetNextPaymentQuery, GetNextPaymentResult};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery, ListPaymentsResult};

/// Fails with `GroupNameNotFound` when a group scope names an unknown group.
async fn ensure_scope_exists(store: &dyn LedgerStore, scope: &Scope) -> Result<(), LedgerError> {
    if let Some(name) = scope.group_name() {
        if store.find_group_by_name(name).await?.is_none() {
            return Err(LedgerError::GroupNameNotFound(name.to_string()));
        }
    }
    Ok(())
}
