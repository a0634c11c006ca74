//! Registration form validation
//!
//! Validates the fields of a user registration request against an ordered set
//! of rules, consulting a user directory for the username lookup:
//! - Email format, username presence and pattern
//! - Password and address/name length limits
//! - Pluggable `UserDirectory` with an in-memory implementation

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    DomainError, RegistrationError, RegistrationForm, RegistrationFormValidator, User,
    UserDirectory, ValidationFailure, Validator,
};
pub use infrastructure::user::InMemoryUserDirectory;
