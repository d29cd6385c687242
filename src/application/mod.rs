//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Ledger handlers
    GetDisplayDataHandler, GetDisplayDataQuery, GetNextPaymentHandler, GetNextPaymentQuery,
    ListPaymentsHandler, ListPaymentsQuery, RecordPaymentCommand, RecordPaymentHandler,
    RemovePaymentCommand, RemovePaymentHandler,
    // Group handlers
    CreateGroupCommand, CreateGroupHandler, GetGroupHandler, GetGroupQuery, ListGroupsHandler,
    ListGroupsQuery, RemoveGroupCommand, RemoveGroupHandler, RenameGroupCommand,
    RenameGroupHandler,
};
