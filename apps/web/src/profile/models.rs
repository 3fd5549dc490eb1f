use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The parsed resume document. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub personal: Personal,
    /// Category name → skills. Categories are only used to organise the
    /// source document; the resume page renders one flat list.
    pub skills: BTreeMap<String, Vec<String>>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Personal {
    pub name: String,
    pub nationality: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub name: String,
}

impl Profile {
    /// Skills across all categories, first occurrence wins on duplicates.
    pub fn flattened_skills(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for skill in self.skills.values().flatten() {
            let skill = skill.as_str();
            if !seen.contains(&skill) {
                seen.push(skill);
            }
        }
        seen
    }

    /// Certifications to display, or `None` when the section should be omitted.
    pub fn displayed_certifications(&self) -> Option<&[Certification]> {
        self.certifications
            .as_deref()
            .filter(|certs| !certs.is_empty())
    }
}
