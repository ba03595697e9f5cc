//! Domain types for Todo Core.
//!
//! This module contains the todo item entity and its input shape.

mod todo;

pub use todo::*;
