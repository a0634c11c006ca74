//! In-memory user directory implementation

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::info;

use crate::domain::user::{User, UserDirectory};
use crate::domain::DomainError;

/// In-memory implementation of UserDirectory, keyed by username
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory with initial users
    ///
    /// Later entries replace earlier ones with the same username.
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username().to_string(), user))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Load a directory from a JSON array of users
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::storage(format!("Failed to read users file '{}': {}", path.display(), e))
        })?;

        let users: Vec<User> = serde_json::from_str(&content).map_err(|e| {
            DomainError::storage(format!("Failed to parse users file '{}': {}", path.display(), e))
        })?;

        info!("Loaded {} users from {}", users.len(), path.display());

        Ok(Self::with_users(users))
    }

    /// Add or replace a user, returning the previous entry for that username
    pub fn insert(&self, user: User) -> Result<Option<User>, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::internal("User directory lock poisoned"))?;

        Ok(users.insert(user.username().to_string(), user))
    }

    /// Number of users in the directory
    pub fn len(&self) -> Result<usize, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::internal("User directory lock poisoned"))?;

        Ok(users.len())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::internal("User directory lock poisoned"))?;

        Ok(users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_find_by_username() {
        let directory = InMemoryUserDirectory::with_users(vec![
            User::new("alice"),
            User::new("bob").with_email("bob@example.com"),
        ]);

        let bob = directory.find_by_username("bob").unwrap().unwrap();
        assert_eq!(bob.email(), Some("bob@example.com"));
        assert!(directory.find_by_username("carol").unwrap().is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let directory = InMemoryUserDirectory::with_users(vec![User::new("alice")]);

        assert!(directory.find_by_username("Alice").unwrap().is_none());
    }

    #[test]
    fn test_insert_replaces_existing() {
        let directory = InMemoryUserDirectory::new();
        assert!(directory.is_empty().unwrap());

        let previous = directory.insert(User::new("alice")).unwrap();
        assert!(previous.is_none());

        let previous = directory
            .insert(User::new("alice").with_email("alice@example.com"))
            .unwrap();
        assert_eq!(previous, Some(User::new("alice")));
        assert_eq!(directory.len().unwrap(), 1);
    }

    #[test]
    fn test_with_users_deduplicates_usernames() {
        let directory =
            InMemoryUserDirectory::with_users(vec![User::new("alice"), User::new("alice")]);

        assert_eq!(directory.len().unwrap(), 1);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"username":"alice"}},{{"username":"bob","email":"bob@example.com"}}]"#
        )
        .unwrap();

        let directory = InMemoryUserDirectory::from_json_file(file.path()).unwrap();

        assert_eq!(directory.len().unwrap(), 2);
        assert!(directory.find_by_username("alice").unwrap().is_some());
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = InMemoryUserDirectory::from_json_file(dir.path().join("missing.json"));

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[test]
    fn test_from_json_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = InMemoryUserDirectory::from_json_file(file.path());

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
