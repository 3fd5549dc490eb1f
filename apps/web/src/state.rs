use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; handlers share nothing else between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}
