//! Validate command - checks a registration form read from disk

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    RegistrationError, RegistrationForm, RegistrationFormValidator, ValidationFailure, Validator,
};
use crate::infrastructure::logging;
use crate::infrastructure::user::InMemoryUserDirectory;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Registration form as JSON
    #[arg(long)]
    pub form: PathBuf,

    /// JSON array of registered users (overrides `directory.users_file`)
    #[arg(long)]
    pub users: Option<PathBuf>,
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let users_file = args.users.or(config.directory.users_file);
    let form = read_form(&args.form)?;
    let directory = load_directory(users_file.as_deref())?;

    let validator = RegistrationFormValidator::new(Arc::new(directory));

    match check_form(&validator, &form)? {
        None => {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        }
        Some(failure) => {
            println!("{}", failure);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run a form through any registration validator
///
/// Returns the violated rule, if any. Directory faults are returned as errors.
fn check_form(
    validator: &dyn Validator<RegistrationForm, Error = RegistrationError>,
    form: &RegistrationForm,
) -> anyhow::Result<Option<ValidationFailure>> {
    match validator.validate(form) {
        Ok(()) => Ok(None),
        Err(RegistrationError::ValidationFailed(failure)) => Ok(Some(failure)),
        Err(e @ RegistrationError::Directory(_)) => Err(e.into()),
    }
}

fn read_form(path: &Path) -> anyhow::Result<RegistrationForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form '{}'", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse form '{}'", path.display()))
}

fn load_directory(users_file: Option<&Path>) -> anyhow::Result<InMemoryUserDirectory> {
    match users_file {
        Some(path) => Ok(InMemoryUserDirectory::from_json_file(path)?),
        None => {
            info!("No users file configured, using an empty directory");
            Ok(InMemoryUserDirectory::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserDirectory};
    use std::io::Write;

    fn json_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_form() {
        let file = json_file(r#"{"username":"abc","email":"a@example.com","password":"secret"}"#);

        let form = read_form(file.path()).unwrap();
        assert_eq!(form.username.as_deref(), Some("abc"));
        assert_eq!(form.password, "secret");
    }

    #[test]
    fn test_read_form_malformed() {
        let file = json_file("{");

        let error = read_form(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse form"));
    }

    #[test]
    fn test_load_directory_without_file_is_empty() {
        let directory = load_directory(None).unwrap();
        assert!(directory.is_empty().unwrap());
    }

    #[test]
    fn test_load_directory_from_file() {
        let file = json_file(r#"[{"username":"abc"}]"#);

        let directory = load_directory(Some(file.path())).unwrap();
        assert!(directory.find_by_username("abc").unwrap().is_some());
    }

    #[test]
    fn test_check_form_valid() {
        let directory = InMemoryUserDirectory::with_users(vec![User::new("abc")]);
        let validator = RegistrationFormValidator::new(Arc::new(directory));
        let form = RegistrationForm::new("a@example.com", "secret").with_username("abc");

        assert!(check_form(&validator, &form).unwrap().is_none());
    }

    #[test]
    fn test_check_form_reports_failure() {
        let validator = RegistrationFormValidator::new(Arc::new(InMemoryUserDirectory::new()));
        let form = RegistrationForm::new("a@example.com", "secret").with_username("abc");

        let failure = check_form(&validator, &form).unwrap().unwrap();
        assert_eq!(failure, ValidationFailure::UsernameNotRegistered);
        assert_eq!(failure.to_string(), "Username already had been registered");
    }
}
