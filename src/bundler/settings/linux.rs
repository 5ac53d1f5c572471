//! Linux descriptor section (`linux`), shared by AppImage and deb.

use super::ArtifactNamingTemplate;

/// Linux package configuration.
///
/// # Desktop Integration
///
/// `desktop` is written into the generated `.desktop` file; keys use the
/// Desktop Entry Specification spelling.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxSettings {
    /// PNG icon, relative to the project root.
    pub icon: String,

    /// AppImage and deb artifact naming.
    pub artifact_name: ArtifactNamingTemplate,

    /// freedesktop.org category.
    ///
    /// Valid values: AudioVideo, Audio, Video, Development, Education, Game,
    /// Graphics, Network, Office, Settings, Utility
    pub category: String,

    /// One-line summary used by package managers.
    pub synopsis: String,

    /// Desktop entry fields.
    pub desktop: DesktopEntry,
}

/// `.desktop` entry fields.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DesktopEntry {
    /// `Name`
    pub name: String,
    /// `Type`, always `Application`.
    #[serde(rename = "Type")]
    pub entry_type: String,
    /// `GenericName`
    pub generic_name: String,
}
