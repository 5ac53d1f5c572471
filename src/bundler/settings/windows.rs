//! Windows descriptor sections (`win`, `nsis`, `portable`).

use super::ArtifactNamingTemplate;

/// Windows application configuration (`win` section).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WindowsSettings {
    /// Path to the .ico icon, relative to the project root.
    pub icon: String,
}

/// NSIS installer configuration (`nsis` section).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NsisSettings {
    /// Icon of the installer executable.
    pub installer_icon: String,

    /// One-click install without a wizard.
    ///
    /// Must be `false` for `allow_to_change_installation_directory` to apply.
    pub one_click: bool,

    /// Let the user pick the install location.
    pub allow_to_change_installation_directory: bool,

    /// Installer artifact naming.
    pub artifact_name: ArtifactNamingTemplate,
}

/// Portable executable configuration (`portable` section).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableSettings {
    /// Portable artifact naming.
    pub artifact_name: ArtifactNamingTemplate,
}
