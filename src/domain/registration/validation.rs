//! Registration validation failures and their messages

use thiserror::Error;

use crate::domain::DomainError;

pub const INCORRECT_EMAIL: &str = "Incorrect email";
pub const MISSING_USERNAME: &str = "You have not entered username or email";
pub const USERNAME_NOT_REGISTERED: &str = "Username already had been registered";
pub const INCORRECT_USERNAME: &str = "Incorrect username";
pub const SMALL_PASSWORD: &str = "Your password has small length";
pub const ADDRESS_OR_NAME_LENGTH: &str = "Address or Name has small length";

/// The rule a registration form violated
///
/// Each variant renders exactly one fixed message. Variants are listed in
/// evaluation order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("{}", INCORRECT_EMAIL)]
    InvalidEmail,

    #[error("{}", MISSING_USERNAME)]
    MissingUsername,

    /// Raised when the directory has no entry for the username
    #[error("{}", USERNAME_NOT_REGISTERED)]
    UsernameNotRegistered,

    #[error("{}", INCORRECT_USERNAME)]
    IncorrectUsername,

    #[error("{}", SMALL_PASSWORD)]
    PasswordTooShort,

    #[error("{}", ADDRESS_OR_NAME_LENGTH)]
    AddressTooLong,

    #[error("{}", ADDRESS_OR_NAME_LENGTH)]
    NameTooLong,
}

impl ValidationFailure {
    /// All failures, in evaluation order
    pub const ALL: [ValidationFailure; 7] = [
        Self::InvalidEmail,
        Self::MissingUsername,
        Self::UsernameNotRegistered,
        Self::IncorrectUsername,
        Self::PasswordTooShort,
        Self::AddressTooLong,
        Self::NameTooLong,
    ];

    /// The user-facing message for this failure
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidEmail => INCORRECT_EMAIL,
            Self::MissingUsername => MISSING_USERNAME,
            Self::UsernameNotRegistered => USERNAME_NOT_REGISTERED,
            Self::IncorrectUsername => INCORRECT_USERNAME,
            Self::PasswordTooShort => SMALL_PASSWORD,
            Self::AddressTooLong | Self::NameTooLong => ADDRESS_OR_NAME_LENGTH,
        }
    }

    /// Short rule name used in log events
    pub fn rule(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "email_format",
            Self::MissingUsername => "username_present",
            Self::UsernameNotRegistered => "username_lookup",
            Self::IncorrectUsername => "username_pattern",
            Self::PasswordTooShort => "password_length",
            Self::AddressTooLong => "address_length",
            Self::NameTooLong => "name_length",
        }
    }
}

/// Errors returned by registration validation
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The form violated a rule; displays the rule's message verbatim
    #[error("{0}")]
    ValidationFailed(ValidationFailure),

    /// The user directory could not answer the lookup
    #[error("User directory lookup failed: {0}")]
    Directory(#[from] DomainError),
}

impl RegistrationError {
    /// The violated rule, if this is a validation failure
    pub fn failure(&self) -> Option<ValidationFailure> {
        match self {
            Self::ValidationFailed(failure) => Some(*failure),
            Self::Directory(_) => None,
        }
    }
}

impl From<ValidationFailure> for RegistrationError {
    fn from(failure: ValidationFailure) -> Self {
        Self::ValidationFailed(failure)
    }
}
