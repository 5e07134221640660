use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{Status, Todo},
    schema::TodoInput,
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Todo API with Rust, SQLx, SQLite, and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for getting all Todo items
pub async fn get_todos(State(data): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = data.store.list_all().await?;
    Ok(Json(todos))
}

async fn list_with_status(data: &AppState, status: Status) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = data.store.list_by_status(status.label()).await?;
    Ok(Json(todos))
}

pub async fn get_not_started_todos(
    State(data): State<Arc<AppState>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    list_with_status(&data, Status::NotStarted).await
}

pub async fn get_in_progress_todos(
    State(data): State<Arc<AppState>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    list_with_status(&data, Status::InProgress).await
}

pub async fn get_completed_todos(
    State(data): State<Arc<AppState>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    list_with_status(&data, Status::Completed).await
}

// Handler for creating a new Todo; the store assigns the id
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    Json(body): Json<TodoInput>,
) -> Result<impl IntoResponse, AppError> {
    let todo = data.store.add(body).await?;
    tracing::debug!(id = todo.id, "created todo");

    let location = format!("/todoitems/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

// Handler for getting a specific Todo by ID
pub async fn get_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<Json<Todo>, AppError> {
    data.store
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

// Handler for replacing title, description and status of a Todo by ID
pub async fn update_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
    Json(body): Json<TodoInput>,
) -> Result<StatusCode, AppError> {
    if !data.store.update(id, body).await? {
        return Err(AppError::NotFound);
    }
    tracing::debug!(id, "updated todo");
    Ok(StatusCode::NO_CONTENT)
}

// Handler for deleting a Todo by ID
pub async fn delete_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    if !data.store.remove(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
