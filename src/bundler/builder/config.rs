//! Process-wide inputs captured once per invocation.

use crate::bundler::targets::ReleaseProfile;
use std::path::PathBuf;

/// Inputs read from the environment at startup.
///
/// Nothing below the CLI reads environment variables or the clock; they
/// receive this struct instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MakeConfig {
    /// Requested release profile.
    pub profile: ReleaseProfile,
    /// macOS signing identity, if any.
    pub identity: Option<String>,
    /// Project root.
    pub root: PathBuf,
    /// Year for the copyright line.
    pub copyright_year: i32,
    /// Home directory, for the default Electron download cache.
    pub home_dir: Option<PathBuf>,
}

impl MakeConfig {
    /// Creates a config with no identity and no home directory.
    pub fn new(profile: ReleaseProfile, root: impl Into<PathBuf>, copyright_year: i32) -> Self {
        Self {
            profile,
            identity: None,
            root: root.into(),
            copyright_year,
            home_dir: None,
        }
    }

    /// Sets the signing identity. Empty strings count as unset.
    pub fn with_identity(mut self, identity: Option<String>) -> Self {
        self.identity = identity.filter(|i| !i.trim().is_empty());
        self
    }

    /// Sets the home directory.
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }
}
