//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, money, errors)
//! - `ledger` - Persons, groups and immutable payment records
//! - `aggregation` - Per-person summaries of payment histories
//! - `fairness` - Next-payer weight policy

pub mod aggregation;
pub mod fairness;
pub mod foundation;
pub mod ledger;
