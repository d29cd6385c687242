//! Ledger module - persons, groups and the payment records that link them.
//!
//! # Invariants
//!
//! - Person and group names are unique, case-sensitive identity keys.
//! - Every payment references exactly one person and one group.
//! - Amounts are non-negative and carry exactly two decimal digits.
//! - Removing a group removes its payments; persons are never removed.

mod entities;
mod errors;
mod payment;
mod scope;

pub use entities::{
    sort_history, validate_name, Group, PaymentEntry, PaymentRecord, PaymentsByGroup, Person,
};
pub use errors::LedgerError;
pub use payment::NewPayment;
pub use scope::Scope;
