//! Error types for the release pipeline.
//!
//! Every failure maps onto one of four kinds (see [`ErrorKind`]); the
//! remaining variants exist to keep enough context for the operator.

use std::{fmt, io, path::PathBuf};

use super::targets::{Platform, TargetSpec};

/// Result type for release pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure classification reported to the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed configuration, manifest or version descriptor.
    Config,
    /// Missing asset, unwritable directory and other filesystem failures.
    Io,
    /// A resolved target has no descriptor section to build from.
    Resolution,
    /// The packaging backend reported failure.
    Backend,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Config => "ConfigError",
            Self::Io => "IOError",
            Self::Resolution => "ResolutionError",
            Self::Backend => "BackendError",
        };
        f.write_str(name)
    }
}

/// Errors raised by the release pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration input could not be used.
    #[error("invalid configuration in {path}: {reason}")]
    Config {
        /// File the problem was found in.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Plain I/O failure.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// I/O failure with the operation and path that caused it.
    #[error("{context} {path}: {error}")]
    Fs {
        /// What was being done.
        context: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        error: io::Error,
    },

    /// A resolved platform has no matching descriptor section.
    #[error("targets for {platform} need a `{section}` descriptor section, but none was assembled")]
    Resolution {
        /// Platform whose targets were resolved.
        platform: Platform,
        /// Descriptor section that is missing.
        section: &'static str,
    },

    /// An artifact naming template could not be fully substituted.
    #[error("artifact naming template `{template}`: {reason}")]
    Template {
        /// Offending template.
        template: String,
        /// Why substitution failed.
        reason: String,
    },

    /// The packaging backend failed for one or more targets.
    #[error(transparent)]
    Backend(#[from] BackendFailure),

    /// Directory traversal failure.
    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping failure.
    #[error("{0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// JSON serialization failure.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// A target matrix broke its grouping invariants.
    #[error("invalid target matrix: {0}")]
    Matrix(String),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Classifies this error into one of the operator-facing kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config { .. } | Self::Template { .. } | Self::Json(_) => ErrorKind::Config,
            Self::Resolution { .. } | Self::Matrix(_) => ErrorKind::Resolution,
            Self::Backend(_) => ErrorKind::Backend,
            Self::IoError(_)
            | Self::Fs { .. }
            | Self::WalkDir(_)
            | Self::StripPrefix(_)
            | Self::GenericError(_) => ErrorKind::Io,
        }
    }
}

/// Failure of a single target inside a backend run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFailure {
    /// Platform the target belongs to.
    pub platform: Platform,
    /// Format and architecture that failed.
    pub target: TargetSpec,
    /// Backend-provided reason.
    pub reason: String,
}

/// Structured backend failure: one entry per failed target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackendFailure {
    /// Failed targets, in the order the backend reported them.
    pub failures: Vec<TargetFailure>,
}

impl BackendFailure {
    /// Records a failure for every target of `platform`.
    pub fn push_all(&mut self, platform: Platform, targets: &[TargetSpec], reason: &str) {
        self.failures
            .extend(targets.iter().map(|target| TargetFailure {
                platform,
                target: *target,
                reason: reason.to_string(),
            }));
    }

    /// True when no target failed.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "packaging failed for {} target(s)", self.failures.len())?;
        for failure in &self.failures {
            write!(
                f,
                "\n  {} {}: {}",
                failure.platform, failure.target, failure.reason
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for BackendFailure {}

/// Attaches filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error with the operation and path that produced it.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
