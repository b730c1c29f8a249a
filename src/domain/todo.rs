//! Todo entity and partial-update semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interactive API docs (Swagger UI) pre-fill string fields with this
/// literal; a patch carrying it is treated as "field not provided".
pub const PLACEHOLDER: &str = "string";

/// A single persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Row id, assigned by the database.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Set once at insert time, never modified.
    pub created_at: DateTime<Utc>,
    /// Stamped server-side on every successful update.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Partial update; absent fields leave the stored row untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Todo {
    /// Copy present, non-placeholder fields from `patch` onto this row and
    /// stamp `updated_at`.
    ///
    /// String fields equal to [`PLACEHOLDER`] are skipped. `completed` is a
    /// bool and is applied whenever present.
    pub fn apply_patch(&mut self, patch: &TodoPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title.as_deref() {
            if title != PLACEHOLDER {
                self.title = title.to_string();
            }
        }
        if let Some(description) = patch.description.as_deref() {
            if description != PLACEHOLDER {
                self.description = description.to_string();
            }
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = now;
    }
}
