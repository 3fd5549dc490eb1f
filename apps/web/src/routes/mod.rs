pub mod health;

use axum::{http::Uri, response::Redirect, routing::get, Router};

use crate::errors::AppError;
use crate::pages::handlers;
use crate::pages::metadata::RESUME_PATH;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent(RESUME_PATH) }))
        .route("/health", get(health::health_handler))
        .route("/contact", get(handlers::handle_contact))
        .route("/resume", get(handlers::handle_resume))
        .fallback(not_found)
        .with_state(state)
}
