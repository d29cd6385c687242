//! Group handlers.
//!
//! ## Commands
//! - Creating, renaming and removing groups
//!
//! ## Queries
//! - Get a group by id
//! - List all groups

mod create_group;
mod get_group;
mod list_groups;
mod remove_group;
mod rename_group;

// Commands
pub use create_group::{CreateGroupCommand, CreateGroupHandler};
pub use remove_group::{RemoveGroupCommand, RemoveGroupHandler};
pub use rename_group::{RenameGroupCommand, RenameGroupHandler};

// Queries
pub use get_group::{GetGroupHandler, GetGroupQuery};
pub use list_groups::{ListGroupsHandler, ListGroupsQuery};
