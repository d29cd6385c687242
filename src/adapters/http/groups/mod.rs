//! HTTP adapter for group endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::group_routes;
