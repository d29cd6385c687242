//! Validated input for the record-payment operation.

use crate::domain::foundation::{Money, ValidationError};

use super::entities::validate_name;

/// A payment that passed validation and is ready to be stored.
///
/// Person and group are referenced by name; the store creates either one
/// if it does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    person: String,
    group: String,
    amount: Money,
    time: String,
}

impl NewPayment {
    /// Validates names and the time token.
    ///
    /// `time` is opaque: it is only compared as text for ordering.
    pub fn new(
        person: impl Into<String>,
        group: impl Into<String>,
        amount: Money,
        time: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let person = person.into();
        let group = group.into();
        let time = time.into();

        validate_name("name", &person)?;
        validate_name("group", &group)?;
        if time.trim().is_empty() {
            return Err(ValidationError::empty_field("time"));
        }

        Ok(Self {
            person,
            group,
            amount,
            time,
        })
    }

    /// Builds a payment from a raw decimal amount, rounding it to cents.
    pub fn from_decimal(
        person: impl Into<String>,
        group: impl Into<String>,
        amount: f64,
        time: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(person, group, Money::from_decimal(amount)?, time)
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_payment() {
        let payment = NewPayment::from_decimal("Alice", "rent", 12.344, "2024-01-01").unwrap();
        assert_eq!(payment.person(), "Alice");
        assert_eq!(payment.group(), "rent");
        assert_eq!(payment.amount().cents(), 1234);
        assert_eq!(payment.time(), "2024-01-01");
    }

    #[test]
    fn rejects_blank_person() {
        let err = NewPayment::from_decimal(" ", "rent", 1.0, "2024-01-01").unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn rejects_blank_group() {
        let err = NewPayment::from_decimal("Alice", "", 1.0, "2024-01-01").unwrap_err();
        assert_eq!(err.field(), "group");
    }

    #[test]
    fn rejects_blank_time() {
        let err = NewPayment::from_decimal("Alice", "rent", 1.0, "").unwrap_err();
        assert_eq!(err.field(), "time");
    }

    #[test]
    fn rejects_negative_amount() {
        let err = NewPayment::from_decimal("Alice", "rent", -5.0, "2024-01-01").unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn names_keep_their_case() {
        let payment = NewPayment::from_decimal("alice", "Rent", 1.0, "t").unwrap();
        assert_eq!(payment.person(), "alice");
        assert_eq!(payment.group(), "Rent");
    }
}
