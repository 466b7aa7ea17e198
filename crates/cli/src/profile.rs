//! Profile file loading.
//!
//! The configuration file is a JSON document of the form:
//!
//! ```json
//! {
//!   "profiles": [
//!     {
//!       "profile_name": "bug",
//!       "subject": "Bug report",
//!       "notes": "templates/bug.html",
//!       "project_name": "Engineering",
//!       "assignee_name": "Alice"
//!     }
//!   ]
//! }
//! ```
//!
//! `notes` is either a path to a local file or literal text; see
//! [`crate::notes::get_notes_content`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use ticket::ProfileName;
use tracing::debug;

use crate::error::ConfigError;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "asana_xt.json";

/// A named bundle of task-creation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub profile_name: String,
    pub subject: String,
    /// Path to a notes file, or the notes text itself.
    pub notes: String,
    pub project_name: String,
    pub assignee_name: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    profiles: Vec<Profile>,
}

/// Loads the profile called `name` from the JSON file at `path`.
///
/// When several entries share the name, the first one wins.
///
/// # Errors
///
/// - [`ConfigError::Unreadable`] if the file cannot be read.
/// - [`ConfigError::Malformed`] if it is not a valid profile document.
/// - [`ConfigError::ProfileNotFound`] if no entry has that `profile_name`.
pub fn load_profile(path: &Path, name: &ProfileName) -> Result<Profile, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConfigFile =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), profiles = config.profiles.len(), "loaded configuration");

    config
        .profiles
        .into_iter()
        .find(|profile| profile.profile_name == name.as_str())
        .ok_or_else(|| ConfigError::ProfileNotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    fn name(value: &str) -> ProfileName {
        ProfileName::new(value).expect("non-empty name")
    }

    const TWO_PROFILES: &str = r#"{
        "profiles": [
            {
                "profile_name": "bug",
                "subject": "Bug report",
                "notes": "Steps to reproduce",
                "project_name": "Engineering",
                "assignee_name": "Alice"
            },
            {
                "profile_name": "chore",
                "subject": "Chore",
                "notes": "<body>Tidy up</body>",
                "project_name": "Ops",
                "assignee_name": "Bob"
            }
        ]
    }"#;

    #[rstest]
    #[case::first("bug", "Bug report", "Alice")]
    #[case::second("chore", "Chore", "Bob")]
    fn returns_the_matching_profile(
        #[case] profile_name: &str,
        #[case] subject: &str,
        #[case] assignee: &str,
    ) {
        let file = config_file(TWO_PROFILES);

        let profile = load_profile(file.path(), &name(profile_name)).expect("profile exists");

        assert_eq!(profile.profile_name, profile_name);
        assert_eq!(profile.subject, subject);
        assert_eq!(profile.assignee_name, assignee);
    }

    #[test]
    fn absent_profile_is_a_configuration_error() {
        let file = config_file(TWO_PROFILES);

        let err = load_profile(file.path(), &name("Bug")).expect_err("names are case-sensitive");

        assert!(matches!(err, ConfigError::ProfileNotFound { ref name, .. } if name == "Bug"));
        assert!(err.to_string().starts_with("Profile 'Bug' not found in "));
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_entry() {
        let file = config_file(
            r#"{"profiles": [
                {"profile_name": "p", "subject": "one", "notes": "", "project_name": "P", "assignee_name": "A"},
                {"profile_name": "p", "subject": "two", "notes": "", "project_name": "P", "assignee_name": "A"}
            ]}"#,
        );

        let profile = load_profile(file.path(), &name("p")).expect("profile exists");

        assert_eq!(profile.subject, "one");
    }

    #[rstest]
    #[case::not_json("profiles: []")]
    #[case::missing_profiles(r#"{"other": []}"#)]
    #[case::missing_field(r#"{"profiles": [{"profile_name": "bug"}]}"#)]
    fn malformed_file_is_a_configuration_error(#[case] contents: &str) {
        let file = config_file(contents);

        let err = load_profile(file.path(), &name("bug")).expect_err("malformed file must fail");

        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().expect("temp dir");

        let err = load_profile(&dir.path().join("absent.json"), &name("bug"))
            .expect_err("missing file must fail");

        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }
}
