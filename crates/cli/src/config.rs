//! Environment-driven configuration for the command-line front end.

use std::path::{Path, PathBuf};

use nc_utilities::TitleCaseConfig;

/// Default dataset path when `--data` is not given
pub const DATA_PATH_VAR: &str = "NC_UTILITIES_DATA_PATH";
/// Comma-separated minor words for title casing
pub const MINOR_WORDS_VAR: &str = "NC_UTILITIES_MINOR_WORDS";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub data_path: Option<PathBuf>,
    pub title_case: TitleCaseConfig,
}

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup(DATA_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let title_case = lookup(MINOR_WORDS_VAR)
            .map(|list| TitleCaseConfig::from_list(&list))
            .unwrap_or_default();

        Self {
            data_path,
            title_case,
        }
    }
}

/// An env file that exists but could not be loaded.
#[derive(Debug)]
pub struct EnvFileError {
    pub path: PathBuf,
    pub error: dotenvy::Error,
}

/// Loads `.env.local` then `.env` from the workspace root, if present.
///
/// Runs before logging is set up, so failures are returned for the caller to
/// report once the subscriber is installed.
pub fn load_dotenv_from_repo_root() -> Vec<EnvFileError> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_dotenv_files(&repo_root)
}

/// Loads `.env.local` then `.env` from `dir`, if present.
pub fn load_dotenv_files(dir: &Path) -> Vec<EnvFileError> {
    let mut failures = Vec::new();
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(error) = dotenvy::from_path(&path) {
                failures.push(EnvFileError { path, error });
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config.data_path, None);
        assert_eq!(config.title_case, TitleCaseConfig::default());
    }

    #[test]
    fn test_reads_data_path_and_minor_words() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (DATA_PATH_VAR, " data/spells.json "),
            (MINOR_WORDS_VAR, "of,the,in,and"),
        ]));
        assert_eq!(config.data_path, Some(PathBuf::from("data/spells.json")));
        assert_eq!(config.title_case.minor_words(), ["of", "the", "in", "and"]);
    }

    #[test]
    fn test_unreadable_env_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join(".env"), "NC_UTILITIES_BROKEN='unterminated\n")
            .expect("write env file");

        let failures = load_dotenv_files(dir.path());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, dir.path().join(".env"));
    }

    #[test]
    fn test_missing_env_files_are_not_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_dotenv_files(dir.path()).is_empty());
    }

    #[test]
    fn test_blank_data_path_is_ignored() {
        let config = CliConfig::from_lookup(lookup_from(&[(DATA_PATH_VAR, "   ")]));
        assert_eq!(config.data_path, None);
    }
}
