//! CreateGroupHandler - Command handler for creating an empty group.

use std::sync::Arc;
use tracing::warn;

use crate::domain::ledger::{Group, LedgerError};
use crate::ports::LedgerStore;

/// Command to create a group.
#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    pub name: String,
}

/// Handler for creating groups.
pub struct CreateGroupHandler {
    store: Arc<dyn LedgerStore>,
}

impl CreateGroupHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateGroupCommand) -> Result<Group, LedgerError> {
        self.store.create_group(&cmd.name).await.map_err(|e| {
            if e.is_client_error() {
                warn!(name = %cmd.name, error = %e, "Group creation rejected");
            }
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::ledger;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn creates_group() {
        let store = ledger().await;
        let group = CreateGroupHandler::new(store.clone())
            .handle(CreateGroupCommand {
                name: "rent".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(group.name, "rent");
        assert_eq!(store.get_group(group.id).await.unwrap(), group);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let handler = CreateGroupHandler::new(ledger().await);
        let cmd = CreateGroupCommand {
            name: "rent".to_string(),
        };
        handler.handle(cmd.clone()).await.unwrap();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateName);
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        let handler = CreateGroupHandler::new(ledger().await);
        for name in ["rent", "Rent"] {
            handler
                .handle(CreateGroupCommand {
                    name: name.to_string(),
                })
                .await
                .unwrap();
        }
    }
}
