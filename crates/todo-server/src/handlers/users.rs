use actix_web::{web, HttpResponse};
use serde::Serialize;
use todo_core::UserSummary;

use crate::error::Result;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse> {
    let users = state.store.list_users().await?;
    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}
