use crate::pages::shell::escape;

pub const EMAIL: &str = "adrian.villanueva.martinez@outlook.com";
pub const GITHUB_URL: &str = "https://github.com/adrianvillanueva997";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/adrian-villanueva-martinez/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Off-site profiles open in a new tab; the mail link does not.
    pub external: bool,
}

pub fn contact_links() -> [ContactLink; 3] {
    [
        ContactLink {
            label: EMAIL,
            href: "mailto:adrian.villanueva.martinez@outlook.com",
            external: false,
        },
        ContactLink {
            label: "GitHub",
            href: GITHUB_URL,
            external: true,
        },
        ContactLink {
            label: "LinkedIn",
            href: LINKEDIN_URL,
            external: true,
        },
    ]
}

/// Renders the contact page body. Constant output.
pub fn render_contact() -> String {
    let mut html = String::from("<section class=\"contact\">\n");
    html.push_str("<h1>Contact</h1>\n");
    html.push_str("<p>Get in touch with me through email or social media.</p>\n");
    html.push_str("<div class=\"contact-links\">\n");
    for link in contact_links() {
        let target = if link.external {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<a href=\"{}\"{target}><span>{}</span></a>\n",
            escape(link.href),
            escape(link.label)
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}
