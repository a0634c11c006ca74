//! User infrastructure module
//!
//! Directory implementations that registration validation can be wired to.

mod directory;

pub use directory::InMemoryUserDirectory;
