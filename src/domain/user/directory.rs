//! User directory trait

use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read-only lookup of registered users
///
/// Implementations are expected to be fast, idempotent reads. A failure of the
/// backing store is reported as an `Err`, never as a missing user.
#[cfg_attr(test, automock)]
pub trait UserDirectory: Send + Sync + Debug {
    /// Find a user by their username
    fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
