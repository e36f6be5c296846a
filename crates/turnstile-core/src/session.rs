//! Persisted session storage.
//!
//! Stores the signed-in identity in `${TURNSTILE_HOME}/session.json` with
//! restricted permissions (0600). The record is identity display data, not a
//! security credential; the server does not issue tokens.
//!
//! A malformed or unreadable file is treated as "no session" — startup never
//! fails because of a bad session record.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::paths;
use crate::models::User;

/// Load/save/clear for the persisted session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a store at the default session path.
    pub fn new() -> Self {
        Self::at(paths::session_path())
    }

    /// Creates a store at a specific path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Restores the persisted session, if any.
    ///
    /// Returns `None` for a missing file, and also for an unreadable or
    /// malformed one (logged at warn level).
    pub fn load(&self) -> Option<User> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to read session file");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "discarding malformed session record"
                );
                None
            }
        }
    }

    /// Persists the identity, replacing any previous record.
    pub fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(user).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted session.
    ///
    /// Returns true if a record existed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        assert!(store.load().is_none());
        store.save(&sample_user()).unwrap();
        assert_eq!(store.load().unwrap(), sample_user());
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        assert!(!store.clear().unwrap());
        store.save(&sample_user()).unwrap();
        assert!(store.clear().unwrap());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_malformed_record_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = SessionStore::at(path);
        assert!(store.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        store.save(&sample_user()).unwrap();

        let mode = fs::metadata(dir.path().join("session.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
