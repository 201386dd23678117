//! Teacher credential directory, loaded once from a JSON file.
//!
//! Passwords are stored and compared in plaintext. This mirrors how the
//! directory has always worked; hardening it is a separate change.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
struct TeachersFile {
    teachers: Vec<Teacher>,
}

#[derive(Debug, Clone, Default)]
pub struct CredentialDirectory {
    teachers: Vec<Teacher>,
}

impl CredentialDirectory {
    pub fn new(teachers: Vec<Teacher>) -> Self {
        Self { teachers }
    }

    /// Read `{"teachers": [{"username": .., "password": ..}, ..]}` from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadCredentials {
            path: path.to_path_buf(),
            source,
        })?;
        let file: TeachersFile =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseCredentials {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = ?path, count = file.teachers.len(), "Loaded teacher credentials");
        Ok(Self::new(file.teachers))
    }

    /// Exact, case-sensitive match on both fields.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.teachers
            .iter()
            .any(|t| t.username == username && t.password == password)
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn directory() -> CredentialDirectory {
        CredentialDirectory::new(vec![Teacher {
            username: "mrodriguez".into(),
            password: "art123".into(),
        }])
    }

    #[test]
    fn authenticate_exact_match_only() {
        let dir = directory();
        assert!(dir.authenticate("mrodriguez", "art123"));
        assert!(!dir.authenticate("mrodriguez", "wrong"));
        assert!(!dir.authenticate("MRodriguez", "art123"));
        assert!(!dir.authenticate("nobody", "art123"));
    }

    #[test]
    fn load_ignores_extra_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"teachers": [
                {{"username": "mchen", "password": "chess456", "display_name": "Mr. Chen"}},
                {{"username": "principal", "password": "admin789"}}
            ]}}"#
        )
        .unwrap();

        let dir = CredentialDirectory::load(file.path()).unwrap();
        assert_eq!(dir.len(), 2);
        assert!(dir.authenticate("principal", "admin789"));
    }

    #[test]
    fn load_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = CredentialDirectory::load(&tmp.path().join("teachers.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadCredentials { .. }));
    }

    #[test]
    fn load_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"staff": []}}"#).unwrap();
        let err = CredentialDirectory::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseCredentials { .. }));
    }
}
