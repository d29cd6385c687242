//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the money value object and the error vocabulary
//! used across the ledger domain.

mod errors;
mod ids;
mod money;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{GroupId, PaymentId, PersonId};
pub use money::Money;
