//! RemoveGroupHandler - Command handler for deleting a group and its payments.

use std::sync::Arc;

use crate::domain::foundation::GroupId;
use crate::domain::ledger::LedgerError;
use crate::ports::LedgerStore;

#[derive(Debug, Clone)]
pub struct RemoveGroupCommand {
    pub group_id: GroupId,
}

pub struct RemoveGroupHandler {
    store: Arc<dyn LedgerStore>,
}

impl RemoveGroupHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RemoveGroupCommand) -> Result<(), LedgerError> {
        self.store.remove_group(cmd.group_id).await
    }
}
