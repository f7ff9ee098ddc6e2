use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpServer};
use std::io;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{extract_trace_id, TracingMiddleware};
use crate::state::AppState;

/// Malformed or mis-shaped JSON bodies get the same error body as every
/// other failure instead of actix's plain-text default.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        "Rejected body for {} {} (trace {}): {}",
        req.method(),
        req.path(),
        extract_trace_id(req).unwrap_or_default(),
        err
    );
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(handlers::health::handler))
        .route("/users", web::get().to(handlers::users::list_users))
        .route("/user/{username}", web::get().to(handlers::lists::get_list))
        .service(
            web::scope("/todos/user/{username}")
                .route("", web::post().to(handlers::lists::create_list))
                .route("", web::put().to(handlers::lists::replace_list))
                .route("", web::delete().to(handlers::lists::delete_list))
                .route("/items", web::post().to(handlers::items::add_todo))
                .route("/items/{id}", web::put().to(handlers::items::update_todo))
                .route("/items/{id}", web::delete().to(handlers::items::delete_todo)),
        );
}

pub async fn run_server(config: ServerConfig, state: AppState) -> io::Result<()> {
    let state = web::Data::new(state);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(TracingMiddleware)
            .configure(app_config)
    })
    .workers(config.workers.max(1))
    .bind(&bind_addr)?
    .run();

    tracing::info!("Todo API listening on http://{}", bind_addr);

    server.await
}
