use actix_web::{web, HttpResponse};
use todo_core::{NewTodo, TodoUpdate};

use crate::error::Result;
use crate::state::AppState;

/// POST /todos/user/{username}/items
pub async fn add_todo(
    state: web::Data<AppState>,
    username: web::Path<String>,
    body: web::Json<NewTodo>,
) -> Result<HttpResponse> {
    let username = username.into_inner();
    let item = state.store.add_todo(&username, body.into_inner()).await?;
    tracing::info!("[{}] Todo {} added", username, item.id);
    Ok(HttpResponse::Created().json(item))
}

/// PUT /todos/user/{username}/items/{id}
pub async fn update_todo(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<TodoUpdate>,
) -> Result<HttpResponse> {
    let (username, id) = path.into_inner();
    let item = state
        .store
        .update_todo(&username, &id, body.into_inner())
        .await?;
    tracing::debug!("[{}] Todo {} updated", username, id);
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /todos/user/{username}/items/{id}
pub async fn delete_todo(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (username, id) = path.into_inner();
    state.store.delete_todo(&username, &id).await?;
    tracing::info!("[{}] Todo {} deleted", username, id);
    Ok(HttpResponse::NoContent().finish())
}
