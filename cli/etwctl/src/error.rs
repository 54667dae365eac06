//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use etw_events::ExtractionError;
use etw_guid::GuidError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a valid GUID: {source}")]
    InvalidGuid { input: String, source: GuidError },

    #[error("{}: {source}", path.display())]
    Extraction {
        path: PathBuf,
        source: ExtractionError,
    },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidGuid { source, .. } if source.is_length_error() => {
                eprintln!(
                    "\n{}",
                    "Hint: GUIDs are 36 characters, without braces: 00000000-0000-0000-0000-000000000000"
                        .yellow()
                );
            }
            CliError::InvalidGuid { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Use hex digits in 8-4-4-4-12 groups separated by hyphens.".yellow()
                );
            }
            CliError::Extraction { source, .. } if source.is_length_error() => {
                eprintln!(
                    "\n{}",
                    "Hint: Container id data must be exactly 36 bytes with no terminator.".yellow()
                );
            }
            CliError::Extraction { .. } => {}
        }
    }
}
