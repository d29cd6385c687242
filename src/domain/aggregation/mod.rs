//! Aggregation view - reduces payment histories into per-person summaries.
//!
//! Pure functions over [`PaymentsByGroup`]; they never touch storage, so the
//! result is the same whichever ledger representation produced the input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Money;
use crate::domain::ledger::{PaymentsByGroup, Person, Scope};

/// What one person has contributed within a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonSummary {
    pub total: Money,
    pub count: u32,
}

/// Per-person summaries keyed by name.
pub type DisplayData = BTreeMap<String, PersonSummary>;

/// Per-person totals keyed by name, the input of the fairness engine.
pub type Totals = BTreeMap<String, Money>;

/// Reduces raw payment histories.
pub struct AggregationView;

impl AggregationView {
    /// Sums amounts and counts records per person inside `scope`.
    ///
    /// Persons without records in scope are absent. Amounts are already
    /// rounded to cents, so the running sum is exact.
    pub fn display_data(payments: &PaymentsByGroup, scope: &Scope) -> DisplayData {
        let mut result = DisplayData::new();
        for (group, entries) in payments {
            if !scope.includes(group) {
                continue;
            }
            for entry in entries {
                let summary = result.entry(entry.person.clone()).or_default();
                summary.total = summary.total + entry.amount;
                summary.count += 1;
            }
        }
        result
    }

    /// Totals for every person known in `scope`, zero included.
    ///
    /// For [`Scope::All`] every person in `persons` is seeded at zero, so
    /// someone whose payments were all removed still competes as a
    /// newcomer. A group scope only knows the people with records there.
    pub fn totals(persons: &[Person], payments: &PaymentsByGroup, scope: &Scope) -> Totals {
        let mut totals = Totals::new();
        if matches!(scope, Scope::All) {
            for person in persons {
                totals.insert(person.name.clone(), Money::ZERO);
            }
        }
        for (name, summary) in Self::display_data(payments, scope) {
            totals.insert(name, summary.total);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PaymentId, PersonId};
    use crate::domain::ledger::PaymentEntry;

    fn entry(id: i64, person: &str, cents: i64) -> PaymentEntry {
        PaymentEntry {
            id: PaymentId::new(id),
            person: person.to_string(),
            amount: Money::from_cents(cents),
            time: format!("2024-01-{:02}", id),
        }
    }

    fn sample() -> PaymentsByGroup {
        let mut payments = PaymentsByGroup::new();
        payments.insert(
            "rent".to_string(),
            vec![entry(1, "Alice", 100), entry(2, "Alice", 200), entry(3, "Bob", 50)],
        );
        payments.insert("food".to_string(), vec![entry(4, "Carol", 0), entry(5, "Bob", 25)]);
        payments
    }

    fn person(id: i64, name: &str) -> Person {
        Person {
            id: PersonId::new(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn display_data_sums_and_counts() {
        let data = AggregationView::display_data(&sample(), &Scope::All);
        assert_eq!(
            data["Alice"],
            PersonSummary {
                total: Money::from_cents(300),
                count: 2
            }
        );
        assert_eq!(data["Bob"].total, Money::from_cents(75));
        assert_eq!(data["Bob"].count, 2);
        assert_eq!(data["Carol"].count, 1);
        assert!(data["Carol"].total.is_zero());
    }

    #[test]
    fn display_data_respects_group_scope() {
        let data = AggregationView::display_data(&sample(), &Scope::Group("food".into()));
        assert_eq!(data.len(), 2);
        assert!(!data.contains_key("Alice"));
        assert_eq!(data["Bob"].total, Money::from_cents(25));
    }

    #[test]
    fn display_data_empty_ledger() {
        let data = AggregationView::display_data(&PaymentsByGroup::new(), &Scope::All);
        assert!(data.is_empty());
    }

    #[test]
    fn totals_seed_known_persons_for_whole_ledger() {
        let persons = vec![person(1, "Alice"), person(2, "Bob"), person(3, "Dave")];
        let totals = AggregationView::totals(&persons, &sample(), &Scope::All);
        assert_eq!(totals["Dave"], Money::ZERO);
        assert_eq!(totals["Alice"], Money::from_cents(300));
        assert!(totals.contains_key("Carol"));
    }

    #[test]
    fn totals_for_group_only_include_its_payers() {
        let persons = vec![person(1, "Alice"), person(2, "Bob"), person(3, "Dave")];
        let totals = AggregationView::totals(&persons, &sample(), &Scope::Group("food".into()));
        let names: Vec<&str> = totals.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
    }
}
