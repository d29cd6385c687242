//! RenameGroupHandler - Command handler for renaming a group.
//!
//! Payments follow the group, so its history is listed under the new name.

use std::sync::Arc;

use crate::domain::foundation::GroupId;
use crate::domain::ledger::{Group, LedgerError};
use crate::ports::LedgerStore;

#[derive(Debug, Clone)]
pub struct RenameGroupCommand {
    pub group_id: GroupId,
    pub new_name: String,
}

pub struct RenameGroupHandler {
    store: Arc<dyn LedgerStore>,
}

impl RenameGroupHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RenameGroupCommand) -> Result<Group, LedgerError> {
        self.store.rename_group(cmd.group_id, &cmd.new_name).await
    }
}
