//! Fairshare - shared expense ledger with a fairness-based next-payer signal.
//!
//! Records who paid what in which group, summarizes contributions per person
//! and weights everyone by how overdue they are to pay next.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
