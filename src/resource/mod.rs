//! Resource handling for Todo Core.
//!
//! Adapts list/get/create/delete requests to store operations and shapes
//! the results, independent of the HTTP framework.

mod handler;

pub use handler::*;
