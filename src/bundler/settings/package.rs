//! Package identity and version.

use std::fmt;

/// Canonical application version: at least `[major, minor, patch, build]`.
///
/// The first three components form the public version string; the fourth is
/// the numeric build version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalVersion {
    components: Vec<u64>,
}

impl CanonicalVersion {
    /// Minimum number of components.
    pub const MIN_COMPONENTS: usize = 4;

    /// Wraps version components, returning `None` if fewer than four.
    pub fn new(components: Vec<u64>) -> Option<Self> {
        (components.len() >= Self::MIN_COMPONENTS).then_some(Self { components })
    }

    /// `major.minor.patch`
    pub fn version_string(&self) -> String {
        format!(
            "{}.{}.{}",
            self.components[0], self.components[1], self.components[2]
        )
    }

    /// The fourth component.
    pub fn build_number(&self) -> u64 {
        self.components[3]
    }

    /// All components as read.
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl fmt::Display for CanonicalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version_string(), self.build_number())
    }
}

/// Package metadata shared by every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageSettings {
    /// Product name displayed to users and used in artifact names.
    pub product_name: String,

    /// Application identifier handed to the backend (`appId`).
    pub app_id: String,

    /// Canonical version.
    pub version: CanonicalVersion,
}
