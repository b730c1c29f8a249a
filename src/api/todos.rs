use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::{NewTodo, Todo, TodoPatch};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        TodoDto {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoDto>), AppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }

    let new = NewTodo {
        title: body.title,
        description: body.description,
        completed: body.completed,
    };

    let todo = state.repo.insert_todo(&new).await?;
    tracing::info!(id = todo.id, "Created todo");

    Ok((StatusCode::CREATED, Json(todo.into())))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoDto>>, AppError> {
    let todos = state.repo.list_todos().await?;
    Ok(Json(todos.into_iter().map(TodoDto::from).collect()))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoDto>, AppError> {
    let todo = state
        .repo
        .get_todo(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    Ok(Json(todo.into()))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<TodoDto>, AppError> {
    let patch = TodoPatch {
        title: body.title,
        description: body.description,
        completed: body.completed,
    };

    let todo = state
        .repo
        .update_todo(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    Ok(Json(todo.into()))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.repo.delete_todo(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    tracing::info!(id, "Deleted todo");
    Ok(Json(MessageResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}

pub async fn delete_all_todos(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.repo.delete_all_todos().await?;
    tracing::info!(deleted, "Deleted all todos");

    Ok(Json(MessageResponse {
        message: "All todos deleted successfully".to_string(),
    }))
}
