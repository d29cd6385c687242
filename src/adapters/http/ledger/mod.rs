//! HTTP adapter for ledger endpoints.
//!
//! - `GET /api/ledger/display` - Display data
//! - `GET /api/ledger/next-payer` - Next-payer weights
//! - `GET /api/ledger/payments` - Payment listing
//! - `POST /api/ledger/payments` - Record a payment
//! - `DELETE /api/ledger/payments/:id` - Remove a payment

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::ledger_routes;
