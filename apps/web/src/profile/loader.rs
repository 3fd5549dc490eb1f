use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::profile::models::Profile;
use crate::profile::validation::{validate_profile, ProfileIssue};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_bw::Error,
    },

    #[error("invalid profile document {}: {}", .path.display(), join_issues(.issues))]
    Invalid {
        path: PathBuf,
        issues: Vec<ProfileIssue>,
    },
}

fn join_issues(issues: &[ProfileIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reads, parses and validates the profile document at `path`.
///
/// Every call hits the filesystem, so edits to the document show up on the
/// next request.
pub async fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    debug!("Loading profile from {}", path.display());

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_profile(path, &raw)
}

/// Parses an in-memory document. `path` is only used for error context.
pub fn parse_profile(path: &Path, raw: &str) -> Result<Profile, ProfileError> {
    let profile: Profile = serde_yaml_bw::from_str(raw).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let issues = validate_profile(&profile);
    if !issues.is_empty() {
        return Err(ProfileError::Invalid {
            path: path.to_path_buf(),
            issues,
        });
    }

    debug!(
        experience = profile.experience.len(),
        education = profile.education.len(),
        languages = profile.languages.len(),
        "Profile loaded"
    );
    Ok(profile)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) fn sample_profile_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/resume.yaml")
    }

    pub(crate) const MINIMAL_PROFILE: &str = r#"
personal:
  name: Ada Lovelace
  nationality: British
  location: London, UK
  summary: First programmer.
skills:
  languages: [Go, Python]
  tools: [Git]
experience:
  - company: Analytical Society
    position: Programmer
    location: London
    startDate: "1842"
    endDate: "1843"
    highlights:
      - Wrote the first published algorithm
education:
  - institution: Home tutoring
    degree: Mathematics
    location: London
    startDate: "1830"
    endDate: "1835"
languages:
  - name: English
    level: Native
"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_sample_document_loads() {
        let profile = load_profile(&sample_profile_path()).await.unwrap();
        assert!(!profile.personal.name.is_empty());
        assert!(!profile.experience.is_empty());
    }

    #[tokio::test]
    async fn test_loading_twice_yields_equal_profiles() {
        let path = sample_profile_path();
        let first = load_profile(&path).await.unwrap();
        let second = load_profile(&path).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(&dir.path().join("absent.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::Read { .. }));
    }

    #[tokio::test]
    async fn test_edits_visible_on_next_load() {
        let file = write_temp(MINIMAL_PROFILE);
        let before = load_profile(file.path()).await.unwrap();

        std::fs::write(
            file.path(),
            MINIMAL_PROFILE.replace("Ada Lovelace", "Augusta Ada King"),
        )
        .unwrap();
        let after = load_profile(file.path()).await.unwrap();

        assert_eq!(before.personal.name, "Ada Lovelace");
        assert_eq!(after.personal.name, "Augusta Ada King");
    }

    #[test]
    fn test_minimal_document_parses() {
        let profile = parse_profile(Path::new("inline.yaml"), MINIMAL_PROFILE).unwrap();
        assert_eq!(profile.personal.location, "London, UK");
        assert_eq!(profile.skills["languages"], vec!["Go", "Python"]);
        assert_eq!(profile.experience[0].highlights.len(), 1);
        assert!(profile.certifications.is_none());
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_profile(Path::new("broken.yaml"), "personal: [unclosed").unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn test_missing_personal_key_is_parse_error() {
        let doc = MINIMAL_PROFILE.replace("personal:", "biography:");
        let err = parse_profile(Path::new("no-personal.yaml"), &doc).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
        assert!(err.to_string().contains("no-personal.yaml"));
    }

    #[test]
    fn test_null_certifications_treated_as_absent() {
        let doc = format!("{MINIMAL_PROFILE}certifications: ~\n");
        let profile = parse_profile(Path::new("inline.yaml"), &doc).unwrap();
        assert!(profile.certifications.is_none());
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let doc = MINIMAL_PROFILE.replace("name: Ada Lovelace", "name: \"\"");
        let err = parse_profile(Path::new("blank.yaml"), &doc).unwrap_err();
        match err {
            ProfileError::Invalid { issues, .. } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field, "personal.name");
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }
}
