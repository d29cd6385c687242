//! Ledger entities: persons, groups and immutable payment records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{GroupId, Money, PaymentId, PersonId, ValidationError};

/// Validates a person or group name.
///
/// Names are case-sensitive identity keys and are stored exactly as given;
/// only blank names are rejected.
pub fn validate_name(field: &str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

/// Someone who pays into one or more groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

/// An expense-sharing group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

/// A stored payment. Records are never edited, only removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub person: String,
    pub group: String,
    pub amount: Money,
    pub time: String,
}

/// One line of a group's payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub id: PaymentId,
    pub person: String,
    pub amount: Money,
    pub time: String,
}

/// Payment history keyed by group name.
///
/// Groups iterate in name order and each history is sorted by time, with
/// equal times kept in insertion (payment id) order.
pub type PaymentsByGroup = BTreeMap<String, Vec<PaymentEntry>>;

/// Sorts a history into canonical order.
pub fn sort_history(entries: &mut [PaymentEntry]) {
    entries.sort_by(|a, b| a.time.cmp(&b.time).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, person: &str, time: &str) -> PaymentEntry {
        PaymentEntry {
            id: PaymentId::new(id),
            person: person.to_string(),
            amount: Money::from_cents(100),
            time: time.to_string(),
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", "Alice").is_ok());
    }

    #[test]
    fn sort_history_orders_by_time_then_id() {
        let mut entries = vec![
            entry(3, "Carol", "2024-02-01"),
            entry(2, "Bob", "2024-01-15"),
            entry(1, "Alice", "2024-01-15"),
        ];
        sort_history(&mut entries);
        let ids: Vec<i64> = entries.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
