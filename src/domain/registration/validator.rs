//! Registration form validator

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use validator::ValidateEmail;

use super::form::RegistrationForm;
use super::validation::{RegistrationError, ValidationFailure};
use crate::domain::user::UserDirectory;
use crate::domain::validator::Validator;

const MIN_PASSWORD_LENGTH: usize = 5;
const MAX_ADDRESS_OR_NAME_LENGTH: usize = 5;

/// Leading run of at least three lowercase letters or digits. No end anchor,
/// so anything may follow the run; a full-string match would end in `$`.
static USERNAME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]{3,}").expect("username prefix pattern is valid"));

/// A lowercase letter somewhere on the first line of the username.
static USERNAME_HAS_LOWERCASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\n\r\u{85}\u{2028}\u{2029}]*[a-z]")
        .expect("username lowercase pattern is valid")
});

/// Validates registration forms against the registration rules
///
/// Rules run in a fixed order and stop at the first failure:
///
/// 1. email is well formed
/// 2. username is present
/// 3. username is found in the directory
/// 4. username starts with 3+ lowercase letters/digits and contains a lowercase letter
/// 5. password has at least 5 characters
/// 6. address, when given, has at most 5 characters
/// 7. name, when given, has at most 5 characters
///
/// Rules 3, 6 and 7 are applied literally as deployed. Rule 3 rejects
/// usernames the directory does NOT know, and rules 6 and 7 reject long values
/// even though the message talks about a small length.
#[derive(Debug)]
pub struct RegistrationFormValidator<D: UserDirectory + ?Sized> {
    directory: Arc<D>,
}

impl<D: UserDirectory + ?Sized> Clone for RegistrationFormValidator<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<D: UserDirectory + ?Sized> RegistrationFormValidator<D> {
    /// Create a new validator backed by the given directory
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    fn check(
        &self,
        form: &RegistrationForm,
    ) -> Result<Option<ValidationFailure>, RegistrationError> {
        if !form.email.validate_email() {
            return Ok(Some(ValidationFailure::InvalidEmail));
        }

        let Some(username) = form.username.as_deref() else {
            return Ok(Some(ValidationFailure::MissingUsername));
        };

        if self.directory.find_by_username(username)?.is_none() {
            return Ok(Some(ValidationFailure::UsernameNotRegistered));
        }

        if !is_valid_username(username) {
            return Ok(Some(ValidationFailure::IncorrectUsername));
        }

        if !is_valid_password(&form.password) {
            return Ok(Some(ValidationFailure::PasswordTooShort));
        }

        if exceeds_length(form.address.as_deref()) {
            return Ok(Some(ValidationFailure::AddressTooLong));
        }

        if exceeds_length(form.name.as_deref()) {
            return Ok(Some(ValidationFailure::NameTooLong));
        }

        Ok(None)
    }
}

impl<D: UserDirectory + ?Sized> Validator<RegistrationForm> for RegistrationFormValidator<D> {
    type Error = RegistrationError;

    /// Validate a registration form
    ///
    /// Returns the first violated rule as `RegistrationError::ValidationFailed`.
    /// A directory fault is returned as `RegistrationError::Directory`.
    fn validate(&self, form: &RegistrationForm) -> Result<(), Self::Error> {
        match self.check(form)? {
            Some(failure) => {
                debug!(
                    rule = failure.rule(),
                    username = form.username.as_deref().unwrap_or_default(),
                    "Registration form rejected"
                );
                Err(RegistrationError::ValidationFailed(failure))
            }
            None => {
                debug!(
                    username = form.username.as_deref().unwrap_or_default(),
                    "Registration form accepted"
                );
                Ok(())
            }
        }
    }
}

fn is_valid_username(username: &str) -> bool {
    USERNAME_HAS_LOWERCASE.is_match(username) && USERNAME_PREFIX.is_match(username)
}

fn is_valid_password(password: &str) -> bool {
    !password.is_empty() && password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn exceeds_length(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v.chars().count() > MAX_ADDRESS_OR_NAME_LENGTH)
}
