//! CLI module for the registration validator
//!
//! Provides subcommands:
//! - `validate`: check a registration form against a user directory
//! - `messages`: list every failure message the validator can report

pub mod messages;
pub mod validate;

use clap::{Parser, Subcommand};

/// Registration form validator
#[derive(Parser)]
#[command(name = "registration-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a registration form read from a JSON file
    Validate(validate::ValidateArgs),

    /// Print the failure messages in evaluation order
    Messages,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "registration-validator",
            "validate",
            "--form",
            "form.json",
            "--users",
            "users.json",
        ])
        .unwrap();

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.form, PathBuf::from("form.json"));
                assert_eq!(args.users, Some(PathBuf::from("users.json")));
            }
            Command::Messages => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_validate_requires_form() {
        assert!(Cli::try_parse_from(["registration-validator", "validate"]).is_err());
    }

    #[test]
    fn test_parse_messages() {
        let cli = Cli::try_parse_from(["registration-validator", "messages"]).unwrap();
        assert!(matches!(cli.command, Command::Messages));
    }
}
