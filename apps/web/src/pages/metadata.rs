//! Per-page `<head>` values. Everything here is a constant except the
//! canonical URL, which is prefixed with the configured base URL.

use crate::config::Config;

pub const SITE_NAME: &str = "Adrian Villanueva";
pub const LOCALE: &str = "en_US";
pub const OG_TYPE: &str = "website";

pub const CONTACT_PATH: &str = "/contact";
pub const RESUME_PATH: &str = "/resume";

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
    pub canonical_url: String,
}

pub fn contact_meta(config: &Config) -> PageMeta {
    PageMeta {
        title: "Contact",
        description: "Get in touch with Adrian Villanueva",
        og_title: "Contact | Adrian Villanueva",
        canonical_url: config.page_url(CONTACT_PATH),
    }
}

pub fn resume_meta(config: &Config) -> PageMeta {
    PageMeta {
        title: "Resume | Adrian Villanueva",
        description: "Adrian Villanueva's professional experience and skills",
        og_title: "Resume | Adrian Villanueva",
        canonical_url: config.page_url(RESUME_PATH),
    }
}

/// Metadata for error pages, which carry no canonical URL.
pub fn error_meta(title: &'static str) -> PageMeta {
    PageMeta {
        title,
        description: "",
        og_title: title,
        canonical_url: String::new(),
    }
}
