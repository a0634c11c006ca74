//! Registration domain
//!
//! Types and rules for validating a submitted registration form before an
//! account is created.

mod form;
mod validation;
mod validator;

pub use form::RegistrationForm;
pub use validation::{
    RegistrationError, ValidationFailure, ADDRESS_OR_NAME_LENGTH, INCORRECT_EMAIL,
    INCORRECT_USERNAME, MISSING_USERNAME, SMALL_PASSWORD, USERNAME_NOT_REGISTERED,
};
pub use validator::RegistrationFormValidator;
