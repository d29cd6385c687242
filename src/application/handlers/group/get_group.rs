//! GetGroupHandler - Query handler for a single group.

use std::sync::Arc;

use crate::domain::foundation::GroupId;
use crate::domain::ledger::{Group, LedgerError};
use crate::ports::LedgerStore;

#[derive(Debug, Clone)]
pub struct GetGroupQuery {
    pub group_id: GroupId,
}

pub struct GetGroupHandler {
    store: Arc<dyn LedgerStore>,
}

impl GetGroupHandler {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetGroupQuery) -> Result<Group, LedgerError> {
        self.store.get_group(query.group_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::ledger;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let err = GetGroupHandler::new(ledger().await)
            .handle(GetGroupQuery {
                group_id: GroupId::new(7),
            })
            .await
            .unwrap_err();
        assert_eq!(err, LedgerError::GroupNotFound(GroupId::new(7)));
    }
}
