//! Request bodies for the group endpoints.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameGroupRequest {
    pub name: String,
}
