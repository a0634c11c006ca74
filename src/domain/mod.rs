//! Domain layer - Core business logic and entities

pub mod error;
pub mod registration;
pub mod user;
pub mod validator;

pub use error::DomainError;
pub use registration::{
    RegistrationError, RegistrationForm, RegistrationFormValidator, ValidationFailure,
};
pub use user::{User, UserDirectory};
pub use validator::Validator;
