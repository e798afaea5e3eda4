//! Admin account creation and the on-disk account store
//!
//! Accounts live in `storage/viltkit/users.json` inside the project. The
//! store is small and append-only in practice, so every write rewrites the
//! whole file. Passwords are stored as blake3 digests; the panel only ever
//! compares hashes.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViltkitError};
use crate::installer::ensure_parent_dir;

/// Store location relative to the project root
pub const STORE_PATH: &str = "storage/viltkit/users.json";

const MIN_PASSWORD_LEN: usize = 8;

#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One stored admin account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Unix seconds at creation time
    pub created_at: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    users: Vec<UserRecord>,
}

/// Admin account store for one project
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(STORE_PATH),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored accounts; a store that does not exist yet is empty
    pub fn load(&self) -> Result<Vec<UserRecord>> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| ViltkitError::FileReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let store: StoreFile =
            serde_json::from_str(&raw).map_err(|e| ViltkitError::AccountStoreParseFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(store.users)
    }

    /// Validate and persist a new admin account.
    ///
    /// All three fields are required; the email must be well formed and not
    /// already taken; the password must be at least eight characters. The
    /// returned record is what was written, hash included.
    pub fn create_user(&self, name: &str, email: &str, password: &str) -> Result<UserRecord> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ViltkitError::MissingUserFields);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ViltkitError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ViltkitError::WeakPassword);
        }

        let mut users = self.load()?;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(ViltkitError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let record = UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: blake3::hash(password.as_bytes()).to_hex().to_string(),
            created_at: unix_now(),
        };
        users.push(record.clone());
        self.persist(&users)?;

        Ok(record)
    }

    fn persist(&self, users: &[UserRecord]) -> Result<()> {
        let store = StoreFile {
            users: users.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&store).map_err(|e| ViltkitError::IoError {
                message: format!("Failed to serialize account store: {}", e),
            })?;

        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, json).map_err(|e| ViltkitError::FileWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_user_persists_record() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        let record = store
            .create_user("Alice", "alice@example.com", "wonderland")
            .unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "alice@example.com");
        assert!(record.created_at > 0);

        let users = store.load().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "alice@example.com");
    }

    #[test]
    fn test_password_is_stored_hashed() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        let record = store
            .create_user("Alice", "alice@example.com", "wonderland")
            .unwrap();
        assert_ne!(record.password_hash, "wonderland");
        assert_eq!(
            record.password_hash,
            blake3::hash(b"wonderland").to_hex().to_string()
        );

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("wonderland"));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        let err = store.create_user("", "alice@example.com", "wonderland");
        assert!(matches!(err, Err(ViltkitError::MissingUserFields)));

        let err = store.create_user("Alice", "", "wonderland");
        assert!(matches!(err, Err(ViltkitError::MissingUserFields)));

        let err = store.create_user("Alice", "alice@example.com", "");
        assert!(matches!(err, Err(ViltkitError::MissingUserFields)));
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        for email in ["alice", "alice@", "@example.com", "alice@example", "a b@example.com"] {
            let err = store.create_user("Alice", email, "wonderland");
            assert!(
                matches!(err, Err(ViltkitError::InvalidEmail)),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn test_short_passwords_are_rejected() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        let err = store.create_user("Alice", "alice@example.com", "short12");
        assert!(matches!(err, Err(ViltkitError::WeakPassword)));

        // Exactly eight characters passes
        assert!(store.create_user("Alice", "alice@example.com", "short123").is_ok());
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        store
            .create_user("Alice", "alice@example.com", "wonderland")
            .unwrap();
        let err = store.create_user("Another", "Alice@Example.com", "different1");
        assert!(matches!(err, Err(ViltkitError::DuplicateEmail { .. })));

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_validation_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());

        let _ = store.create_user("Alice", "not-an-email", "wonderland");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_store_survives_reopening() {
        let temp = TempDir::new().unwrap();

        UserStore::new(temp.path())
            .create_user("Alice", "alice@example.com", "wonderland")
            .unwrap();
        UserStore::new(temp.path())
            .create_user("Bob", "bob@example.com", "builder12")
            .unwrap();

        let users = UserStore::new(temp.path()).load().unwrap();
        let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["alice@example.com", "bob@example.com"]);
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = UserStore::new(temp.path());
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{broken").unwrap();

        assert!(store.load().is_err());
        assert!(store.create_user("Alice", "alice@example.com", "wonderland").is_err());
    }
}
