use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::metadata::error_meta;
use crate::pages::shell::{render_document, render_error_body};
use crate::profile::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "The page you are looking for does not exist",
            ),
            AppError::Profile(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROFILE_UNAVAILABLE",
                "The resume is temporarily unavailable",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        match &self {
            AppError::NotFound(path) => tracing::debug!("Not found: {path}"),
            AppError::Profile(e) => tracing::error!(code, "Profile error: {e}"),
        }

        let body = render_document(
            &error_meta(message),
            &render_error_body(status.as_u16(), message),
        );
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_profile_error_maps_to_500() {
        let err = AppError::from(ProfileError::Invalid {
            path: PathBuf::from("data/resume.yaml"),
            issues: vec![],
        });
        assert_eq!(err.parts().0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.parts().1, "PROFILE_UNAVAILABLE");
    }

    #[test]
    fn test_profile_error_response_status() {
        let err = AppError::from(ProfileError::Invalid {
            path: PathBuf::from("/srv/secret/resume.yaml"),
            issues: vec![],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("/nope".to_string());
        assert_eq!(err.parts().0, StatusCode::NOT_FOUND);
    }
}
