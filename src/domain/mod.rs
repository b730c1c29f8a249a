//! Domain types for the todo API.
//!
//! This module provides:
//! - The persisted `Todo` entity
//! - `NewTodo` for inserts and `TodoPatch` for partial updates
//! - Placeholder-aware patch application

pub mod todo;

pub use todo::{NewTodo, Todo, TodoPatch};
