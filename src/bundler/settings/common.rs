//! Inputs shared by every descriptor section.

use super::PackageSettings;
use std::path::PathBuf;

/// Directory layout handed to the backend, relative to the project root.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directories {
    /// Where the backend looks for build resources.
    pub build_resources: String,
    /// The staged application tree.
    pub app: String,
    /// Where the backend writes artifacts.
    pub output: String,
}

impl Default for Directories {
    fn default() -> Self {
        Self {
            build_resources: "build".into(),
            app: "build".into(),
            output: "dist".into(),
        }
    }
}

/// Where the backend downloads Electron from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ElectronDownload {
    /// Local download cache.
    pub cache: PathBuf,
    /// Download mirror URL.
    pub mirror: String,
}

/// Overridable per-platform values with release defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformOverrides {
    /// macOS LSApplicationCategoryType.
    pub mac_category: String,
    /// freedesktop.org category.
    pub linux_category: String,
    /// One-line product summary (linux synopsis and desktop GenericName).
    pub synopsis: String,
}

impl Default for PlatformOverrides {
    fn default() -> Self {
        Self {
            mac_category: "public.app-category.productivity".into(),
            linux_category: "Utility".into(),
            synopsis: "An App for hosts management and switching.".into(),
        }
    }
}

/// Everything the assembler needs besides identity and localizations.
///
/// Values that depend on the process environment (the current year, the
/// home directory) are captured by the caller before this is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonConfig {
    /// Product identity and version.
    pub package: PackageSettings,
    /// Year printed in the copyright line.
    pub copyright_year: i32,
    /// Directory layout.
    pub directories: Directories,
    /// Electron download settings, if any.
    pub electron_download: Option<ElectronDownload>,
    /// Per-platform overrides.
    pub overrides: PlatformOverrides,
}

impl CommonConfig {
    /// `Copyright © <year>`
    pub fn copyright(&self) -> String {
        format!("Copyright © {}", self.copyright_year)
    }
}
