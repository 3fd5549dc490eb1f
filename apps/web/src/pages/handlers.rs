//! Axum route handlers for the site pages.

use axum::{extract::State, response::Html};
use tracing::info;

use crate::errors::AppError;
use crate::pages::contact::render_contact;
use crate::pages::metadata::{contact_meta, resume_meta};
use crate::pages::resume::render_resume;
use crate::pages::shell::render_document;
use crate::profile::load_profile;
use crate::state::AppState;

/// GET /contact
pub async fn handle_contact(State(state): State<AppState>) -> Html<String> {
    Html(render_document(
        &contact_meta(&state.config),
        &render_contact(),
    ))
}

/// GET /resume
///
/// Loads the profile document fresh and renders it. Any load failure fails
/// the whole page; nothing is rendered from partial data.
pub async fn handle_resume(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let profile = load_profile(&state.config.resume_path).await?;
    info!("Rendering resume for {}", profile.personal.name);

    let body = render_resume(&profile, state.config.resume_pdf_url.as_deref());
    Ok(Html(render_document(&resume_meta(&state.config), &body)))
}
