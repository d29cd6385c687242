//! Axum router configuration for ledger endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{
    get_display_data, get_next_payment, list_payments, record_payment, remove_payment,
};
use crate::adapters::http::state::LedgerAppState;

/// Create the ledger API router.
///
/// # Routes
///
/// - `GET /display` - Per-person totals and counts (`?group=` optional)
/// - `GET /next-payer` - Next-payer weights (`?group=` optional)
/// - `GET /payments` - All payments grouped by group name
/// - `POST /payments` - Record a payment
/// - `DELETE /payments/:id` - Remove a payment
pub fn ledger_routes() -> Router<LedgerAppState> {
    Router::new()
        .route("/display", get(get_display_data))
        .route("/next-payer", get(get_next_payment))
        .route("/payments", get(list_payments).post(record_payment))
        .route("/payments/:id", delete(remove_payment))
}
