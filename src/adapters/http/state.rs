//! Shared state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::{
    CreateGroupHandler, GetDisplayDataHandler, GetGroupHandler, GetNextPaymentHandler,
    ListGroupsHandler, ListPaymentsHandler, RecordPaymentHandler, RemoveGroupHandler,
    RemovePaymentHandler, RenameGroupHandler,
};
use crate::ports::LedgerStoreFactory;

/// Application state cloned into every request.
///
/// Holds only the store factory; each handler gets a fresh store handle
/// from it, so no ledger state lives in the process between requests.
#[derive(Clone)]
pub struct LedgerAppState {
    pub stores: Arc<dyn LedgerStoreFactory>,
    pub default_group: String,
}

impl LedgerAppState {
    pub fn new(stores: Arc<dyn LedgerStoreFactory>, default_group: impl Into<String>) -> Self {
        Self {
            stores,
            default_group: default_group.into(),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn record_payment_handler(&self) -> RecordPaymentHandler {
        RecordPaymentHandler::new(self.stores.open(), self.default_group.clone())
    }

    pub fn remove_payment_handler(&self) -> RemovePaymentHandler {
        RemovePaymentHandler::new(self.stores.open())
    }

    pub fn list_payments_handler(&self) -> ListPaymentsHandler {
        ListPaymentsHandler::new(self.stores.open())
    }

    pub fn display_data_handler(&self) -> GetDisplayDataHandler {
        GetDisplayDataHandler::new(self.stores.open())
    }

    pub fn next_payment_handler(&self) -> GetNextPaymentHandler {
        GetNextPaymentHandler::new(self.stores.open())
    }

    pub fn create_group_handler(&self) -> CreateGroupHandler {
        CreateGroupHandler::new(self.stores.open())
    }

    pub fn get_group_handler(&self) -> GetGroupHandler {
        GetGroupHandler::new(self.stores.open())
    }

    pub fn list_groups_handler(&self) -> ListGroupsHandler {
        ListGroupsHandler::new(self.stores.open())
    }

    pub fn rename_group_handler(&self) -> RenameGroupHandler {
        RenameGroupHandler::new(self.stores.open())
    }

    pub fn remove_group_handler(&self) -> RemoveGroupHandler {
        RemoveGroupHandler::new(self.stores.open())
    }
}
