//! Storage layer for Todo Core.
//!
//! Holds todo items in memory; nothing survives a restart.

mod store;

pub use store::TodoStore;
