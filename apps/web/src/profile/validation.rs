use serde::Serialize;

use crate::profile::models::Profile;

/// One blank field found in a profile document, addressed by its YAML path.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileIssue {
    pub field: String,
    pub reason: String,
}

impl std::fmt::Display for ProfileIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Checks that every field the resume page headlines with is non-blank.
///
/// Collects every issue instead of stopping at the first one, so a broken
/// document can be fixed in a single edit.
pub fn validate_profile(profile: &Profile) -> Vec<ProfileIssue> {
    let mut issues = Vec::new();

    let personal = &profile.personal;
    require(&mut issues, "personal.name", &personal.name);
    require(&mut issues, "personal.nationality", &personal.nationality);
    require(&mut issues, "personal.location", &personal.location);
    require(&mut issues, "personal.summary", &personal.summary);

    for (i, exp) in profile.experience.iter().enumerate() {
        require(&mut issues, &format!("experience[{i}].company"), &exp.company);
        require(&mut issues, &format!("experience[{i}].position"), &exp.position);
    }

    for (i, edu) in profile.education.iter().enumerate() {
        require(
            &mut issues,
            &format!("education[{i}].institution"),
            &edu.institution,
        );
        require(&mut issues, &format!("education[{i}].degree"), &edu.degree);
    }

    for (i, lang) in profile.languages.iter().enumerate() {
        require(&mut issues, &format!("languages[{i}].name"), &lang.name);
    }

    for (i, cert) in profile.certifications.iter().flatten().enumerate() {
        require(&mut issues, &format!("certifications[{i}].name"), &cert.name);
    }

    issues
}

fn require(issues: &mut Vec<ProfileIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ProfileIssue {
            field: field.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
}
