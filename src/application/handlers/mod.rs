//! Application handlers.
//!
//! Command and query handlers that orchestrate ledger operations. Each
//! handler owns an `Arc<dyn LedgerStore>` and is built per request.

pub mod group;
pub mod ledger;

#[cfg(test)]
mod test_support;

pub use group::{
    CreateGroupCommand, CreateGroupHandler, GetGroupHandler, GetGroupQuery, ListGroupsHandler,
    ListGroupsQuery, RemoveGroupCommand, RemoveGroupHandler, RenameGroupCommand,
    RenameGroupHandler,
};
pub use ledger::{
    GetDisplayDataHandler, GetDisplayDataQuery, GetDisplayDataResult, GetNextPaymentHandler,
    GetNextPaymentQuery, GetNextPaymentResult, ListPaymentsHandler, ListPaymentsQuery,
    ListPaymentsResult, RecordPaymentCommand, RecordPaymentHandler, RecordPaymentResult,
    RemovePaymentCommand, RemovePaymentHandler,
};
