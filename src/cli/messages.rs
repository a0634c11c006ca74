//! Messages command - lists the failure messages

use std::process::ExitCode;

use crate::domain::ValidationFailure;

/// Print each rule with its message, in evaluation order
pub fn run() -> anyhow::Result<ExitCode> {
    for line in lines() {
        println!("{}", line);
    }

    Ok(ExitCode::SUCCESS)
}

fn lines() -> Vec<String> {
    ValidationFailure::ALL
        .iter()
        .map(|failure| format!("{:<17} {}", failure.rule(), failure.message()))
        .collect()
}
