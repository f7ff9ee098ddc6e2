use actix_web::{web, HttpResponse};
use serde::Serialize;
use todo_core::NewTodo;

use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn ok() -> Self {
        Self {
            result: "ok".to_string(),
        }
    }

    pub fn saved(count: usize) -> Self {
        Self {
            result: format!("A list with {} todos was succesfully saved", count),
        }
    }
}

/// GET /user/{username}
pub async fn get_list(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let username = username.into_inner();
    let items = state.store.get_list(&username).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /todos/user/{username}; the body must be `[]`
pub async fn create_list(
    state: web::Data<AppState>,
    username: web::Path<String>,
    body: web::Json<Vec<serde_json::Value>>,
) -> Result<HttpResponse> {
    let username = username.into_inner();
    if !body.is_empty() {
        return Err(AppError::BadRequest(
            "The request body must be an empty array.".to_string(),
        ));
    }

    state.store.create_list(&username).await?;
    tracing::info!("[{}] Todo list created", username);
    Ok(HttpResponse::Created().json(ResultResponse::ok()))
}

/// PUT /todos/user/{username}
pub async fn replace_list(
    state: web::Data<AppState>,
    username: web::Path<String>,
    body: web::Json<Vec<NewTodo>>,
) -> Result<HttpResponse> {
    let username = username.into_inner();
    let count = state
        .store
        .replace_list(&username, body.into_inner())
        .await?;
    tracing::info!("[{}] Todo list replaced with {} item(s)", username, count);
    Ok(HttpResponse::Ok().json(ResultResponse::saved(count)))
}

/// DELETE /todos/user/{username}
pub async fn delete_list(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let username = username.into_inner();
    state.store.delete_list(&username).await?;
    tracing::info!("[{}] Todo list deleted", username);
    Ok(HttpResponse::Ok().json(ResultResponse::ok()))
}
