use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_RESUME_PATH: &str = "data/resume.yaml";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_RESUME_PDF_URL: &str = "/resume.pdf";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Location of the profile document. Read on every resume render.
    pub resume_path: PathBuf,
    /// Prefix for canonical and Open Graph URLs, without a trailing slash.
    pub base_url: String,
    /// Target of the header download link. `None` hides the link.
    pub resume_pdf_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            resume_path: std::env::var("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESUME_PATH)),
            base_url: normalize_base_url(
                &std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ),
            resume_pdf_url: pdf_url_from(std::env::var("RESUME_PDF_URL").ok()),
        })
    }

    /// Absolute URL of a site path, e.g. `/resume`.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Unset falls back to the bundled PDF; an explicitly empty value disables the link.
fn pdf_url_from(raw: Option<String>) -> Option<String> {
    match raw {
        None => Some(DEFAULT_RESUME_PDF_URL.to_string()),
        Some(url) if url.trim().is_empty() => None,
        Some(url) => Some(url.trim().to_string()),
    }
}

#[cfg(test)]
impl Config {
    /// Config pointing at an arbitrary profile document, for handler tests.
    pub fn for_tests(resume_path: impl Into<PathBuf>) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            resume_path: resume_path.into(),
            base_url: "https://example.test".to_string(),
            resume_pdf_url: Some(DEFAULT_RESUME_PDF_URL.to_string()),
        }
    }
}
