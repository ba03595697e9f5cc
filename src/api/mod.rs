//! HTTP API layer for Todo Core.
//!
//! Provides REST endpoints for listing, creating and deleting todo items.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
