//! Strongly-typed identifier value objects.
//!
//! Ledger identifiers are positive integers assigned by the store. They are
//! never reused, so a removed payment id will not reappear later.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! ledger_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store identifier.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_format($field, "expected an integer id"))?;
                if value <= 0 {
                    return Err(ValidationError::invalid_format($field, "id must be positive"));
                }
                Ok(Self(value))
            }
        }
    };
}

ledger_id!(
    /// Identifier of a person who pays into groups.
    PersonId,
    "person_id"
);

ledger_id!(
    /// Identifier of an expense-sharing group.
    GroupId,
    "group_id"
);

ledger_id!(
    /// Identifier of a single recorded payment.
    PaymentId,
    "payment_id"
);
