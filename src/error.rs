//! Error types for the command line surface.
//!
//! This module defines the top-level error with recovery suggestions the
//! CLI prints after the failure itself.

use crate::bundler::ErrorKind;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, MakeError>;

/// Main error type for a make run
#[derive(Error, Debug)]
pub enum MakeError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors outside the pipeline
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Release pipeline errors
    #[error("{}: {}", .0.kind(), .0)]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl MakeError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        let kind = match self {
            Self::Bundler(e) => Some(e.kind()),
            _ => None,
        };

        match kind {
            Some(ErrorKind::Config) => vec![
                "Check src/version.json holds at least four integers, e.g. [4, 1, 2, 6086]".into(),
                "Check package.json, app/package.json and make.toml are well formed".into(),
            ],
            Some(ErrorKind::Io) => vec![
                "Check that every asset listed for staging exists".into(),
                "Check that the build and dist directories are writable".into(),
            ],
            Some(ErrorKind::Resolution) => {
                vec!["A descriptor section is missing for a resolved target; this is a bug".into()]
            }
            Some(ErrorKind::Backend) => vec![
                "Inspect the electron-builder output above; partial artifacts are left in dist/"
                    .into(),
                "Re-run with RUST_LOG=debug for the full command lines".into(),
            ],
            None => vec!["Run with --help for usage".into()],
        }
    }
}
