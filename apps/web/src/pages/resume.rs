//! Resume page: a pure projection of a [`Profile`] into HTML sections.
//!
//! Section order is fixed: header, summary, skills, experience, education,
//! languages, certifications. Only certifications is ever omitted, and only
//! when the profile has none. Entries keep document order.

use crate::pages::shell::escape;
use crate::profile::models::{
    Certification, EducationEntry, ExperienceEntry, LanguageEntry, Personal,
};
use crate::profile::Profile;

pub fn render_resume(profile: &Profile, pdf_url: Option<&str>) -> String {
    let mut html = String::from("<section class=\"resume\">\n");
    html.push_str(&render_header(&profile.personal, pdf_url));
    html.push_str(&render_summary(&profile.personal));
    html.push_str(&render_skills(&profile.flattened_skills()));
    html.push_str(&render_experience(&profile.experience));
    html.push_str(&render_education(&profile.education));
    html.push_str(&render_languages(&profile.languages));
    if let Some(certs) = profile.displayed_certifications() {
        html.push_str(&render_certifications(certs));
    }
    html.push_str("</section>\n");
    html
}

pub fn render_header(personal: &Personal, pdf_url: Option<&str>) -> String {
    let mut html = String::from("<header class=\"resume-header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&personal.name)));
    html.push_str(&format!(
        "<span class=\"nationality\">🌍 {}</span>\n",
        escape(&personal.nationality)
    ));
    html.push_str(&format!(
        "<span class=\"location\">📍 {}</span>\n",
        escape(&personal.location)
    ));
    if let Some(url) = pdf_url {
        html.push_str(&format!(
            "<a class=\"download\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Download PDF</a>\n",
            escape(url)
        ));
    }
    html.push_str("</header>\n");
    html
}

pub fn render_summary(personal: &Personal) -> String {
    format!(
        "<section class=\"summary\">\n<p>{}</p>\n</section>\n",
        escape(&personal.summary)
    )
}

pub fn render_skills(skills: &[&str]) -> String {
    let mut html = String::from("<section class=\"skills\">\n<h2>Skills</h2>\n");
    html.push_str(&badges(skills.iter().map(|s| s.to_string())));
    html.push_str("</section>\n");
    html
}

pub fn render_experience(entries: &[ExperienceEntry]) -> String {
    let mut html = String::from("<section class=\"experience\">\n<h2>Experience</h2>\n");
    for exp in entries {
        html.push_str("<article class=\"entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&exp.company)));
        html.push_str(&date_range(&exp.start_date, &exp.end_date));
        html.push_str(&format!("<p class=\"role\">{}</p>\n", escape(&exp.position)));
        html.push_str(&format!(
            "<span class=\"location\">📍 {}</span>\n",
            escape(&exp.location)
        ));
        html.push_str("<ul>\n");
        for highlight in &exp.highlights {
            html.push_str(&format!("<li>{}</li>\n", escape(highlight)));
        }
        html.push_str("</ul>\n</article>\n");
    }
    html.push_str("</section>\n");
    html
}

pub fn render_education(entries: &[EducationEntry]) -> String {
    let mut html = String::from("<section class=\"education\">\n<h2>Education</h2>\n");
    for edu in entries {
        html.push_str("<article class=\"entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&edu.institution)));
        html.push_str(&date_range(&edu.start_date, &edu.end_date));
        html.push_str(&format!("<p class=\"role\">{}</p>\n", escape(&edu.degree)));
        html.push_str(&format!(
            "<span class=\"location\">📍 {}</span>\n",
            escape(&edu.location)
        ));
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");
    html
}

pub fn render_languages(entries: &[LanguageEntry]) -> String {
    let mut html = String::from("<section class=\"languages\">\n<h2>Languages</h2>\n");
    html.push_str(&badges(
        entries
            .iter()
            .map(|lang| format!("{} ({})", lang.name, lang.level)),
    ));
    html.push_str("</section>\n");
    html
}

pub fn render_certifications(certs: &[Certification]) -> String {
    let mut html = String::from("<section class=\"certifications\">\n<h2>Certifications</h2>\n");
    html.push_str(&badges(certs.iter().map(|cert| cert.name.clone())));
    html.push_str("</section>\n");
    html
}

fn date_range(start: &str, end: &str) -> String {
    format!(
        "<span class=\"dates\">{} - {}</span>\n",
        escape(start),
        escape(end)
    )
}

fn badges(items: impl Iterator<Item = String>) -> String {
    let mut html = String::from("<div class=\"badges\">\n");
    for item in items {
        html.push_str(&format!("<span class=\"badge\">{}</span>\n", escape(&item)));
    }
    html.push_str("</div>\n");
    html
}
