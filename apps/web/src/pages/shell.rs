//! HTML document shell and text escaping shared by every page.

use crate::pages::metadata::{PageMeta, LOCALE, OG_TYPE, SITE_NAME};

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a rendered `<main>` body in a complete HTML document.
pub fn render_document(meta: &PageMeta, body: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(meta.title)));
    if !meta.description.is_empty() {
        html.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape(meta.description)
        ));
    }
    if !meta.canonical_url.is_empty() {
        html.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape(&meta.canonical_url)
        ));
        html.push_str(&og_tag("og:url", &meta.canonical_url));
    }
    html.push_str(&og_tag("og:title", meta.og_title));
    if !meta.description.is_empty() {
        html.push_str(&og_tag("og:description", meta.description));
    }
    html.push_str(&og_tag("og:site_name", SITE_NAME));
    html.push_str(&og_tag("og:locale", LOCALE));
    html.push_str(&og_tag("og:type", OG_TYPE));
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn og_tag(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{}\" content=\"{}\">\n",
        property,
        escape(content)
    )
}

/// Body for an error response. Only the public message is shown.
pub fn render_error_body(status: u16, message: &str) -> String {
    format!(
        "<section class=\"error\">\n<h1>{status}</h1>\n<p>{}</p>\n</section>\n",
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::metadata::error_meta;

    fn meta() -> PageMeta {
        PageMeta {
            title: "Resume | Adrian Villanueva",
            description: "Adrian Villanueva's professional experience and skills",
            og_title: "Resume | Adrian Villanueva",
            canonical_url: "https://example.test/resume".to_string(),
        }
    }

    #[test]
    fn test_escape_html_specials() {
        assert_eq!(
            escape(r#"<b>"R&D"</b> it's"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Madrid, Spain"), "Madrid, Spain");
    }

    #[test]
    fn test_document_carries_metadata() {
        let html = render_document(&meta(), "<p>body</p>");
        assert!(html.contains("<title>Resume | Adrian Villanueva</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.test/resume">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://example.test/resume">"#));
        assert!(html.contains(r#"<meta property="og:locale" content="en_US">"#));
        assert!(html.contains(r#"<meta property="og:site_name" content="Adrian Villanueva">"#));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(
            r#"<meta name="description" content="Adrian Villanueva&#39;s professional experience and skills">"#
        ));
        assert!(html.contains("<main>\n<p>body</p></main>"));
    }

    #[test]
    fn test_error_document_has_no_canonical() {
        let html = render_document(&error_meta("Not found"), &render_error_body(404, "Nope"));
        assert!(!html.contains("rel=\"canonical\""));
        assert!(!html.contains("og:url"));
        assert!(html.contains("<h1>404</h1>"));
    }
}
