//! Repository layer for database operations.
//!
//! All access to the `todos` table goes through `Repository`. Handlers never
//! touch the pool directly; each method checks a connection out of the pool
//! for the duration of the call, and the read-modify-write update path runs
//! inside an explicit transaction.

use crate::domain::{NewTodo, Todo, TodoPatch};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a todo and return the stored row.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_todo(&self, new: &NewTodo) -> Result<Todo, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO todos (title, description, completed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.completed)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            title: new.title.clone(),
            description: new.description.clone(),
            completed: new.completed,
            created_at: now,
            updated_at: now,
        })
    }

    /// List all todos ordered by id ascending.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    /// Get a single todo by id.
    ///
    /// Returns None if no row with that id exists.
    pub async fn get_todo(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_todo))
    }

    /// Apply a partial update to a todo and return the updated row.
    ///
    /// The read and the write run in one transaction so a concurrent update
    /// cannot slip between them. Returns None if no row with that id exists.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn update_todo(
        &self,
        id: i64,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let mut todo = match row.as_ref().map(row_to_todo) {
            Some(todo) => todo,
            None => return Ok(None),
        };

        todo.apply_patch(patch, Utc::now());

        sqlx::query(
            r#"
            UPDATE todos
            SET title = ?, description = ?, completed = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(todo))
    }

    /// Delete a todo by id.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete_todo(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every todo.
    ///
    /// Returns the number of deleted rows.
    pub async fn delete_all_todos(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

fn row_to_todo(row: &SqliteRow) -> Todo {
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    Todo {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        completed: row.get("completed"),
        created_at,
        updated_at,
    }
}
