//! User domain
//!
//! This module provides the directory entry type and the lookup trait that
//! registration validation consults to decide whether a username is known.

mod directory;
mod entity;

pub use directory::UserDirectory;
pub use entity::User;

#[cfg(test)]
pub use directory::MockUserDirectory;
