//! macOS descriptor sections (`mac`, `dmg`).

use super::ArtifactNamingTemplate;

/// macOS application configuration (`mac` section).
///
/// Serialized as the backend reads it. `identity` is omitted when unset, in
/// which case signing is left entirely to the backend.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacOsSettings {
    /// Distribution type, always `distribution` for release builds.
    #[serde(rename = "type")]
    pub distribution_type: String,

    /// LSApplicationCategoryType.
    ///
    /// Example: "public.app-category.productivity"
    pub category: String,

    /// Path to the .icns icon, relative to the project root.
    pub icon: String,

    /// Run `spctl` assessment after signing.
    pub gatekeeper_assess: bool,

    /// Electron locales to keep in the bundle.
    pub electron_languages: Vec<String>,

    /// Code signing identity name.
    ///
    /// Example: "Developer ID Application: Your Name (TEAMID)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    /// Sign with the hardened runtime (required for notarization).
    pub hardened_runtime: bool,

    /// Path to the entitlements plist.
    pub entitlements: String,

    /// Entitlements for helper processes.
    pub entitlements_inherit: String,

    /// Path to the provisioning profile.
    pub provisioning_profile: String,

    /// Extra Info.plist entries.
    pub extend_info: ExtendInfo,

    /// Naming for mac targets without a dedicated section.
    pub artifact_name: ArtifactNamingTemplate,
}

/// Info.plist additions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExtendInfo {
    /// Export compliance flag.
    #[serde(rename = "ITSAppUsesNonExemptEncryption")]
    pub uses_non_exempt_encryption: bool,

    /// Localizations advertised to Finder.
    #[serde(rename = "CFBundleLocalizations")]
    pub bundle_localizations: Vec<String>,

    /// Development region.
    #[serde(rename = "CFBundleDevelopmentRegion")]
    pub development_region: String,
}

/// macOS DMG disk image configuration (`dmg` section).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DmgSettings {
    /// Background image, relative to the project root.
    ///
    /// Recommended size matches [`DmgSettings::window`].
    pub background: String,

    /// Icon size in the Finder window.
    pub icon_size: u32,

    /// Finder window size.
    pub window: DmgWindow,

    /// Icon positions: the app first, then the `/Applications` drop link.
    pub contents: Vec<DmgContent>,

    /// Sign the DMG itself.
    pub sign: bool,

    /// DMG artifact naming.
    pub artifact_name: ArtifactNamingTemplate,
}

/// DMG window size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DmgWindow {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

/// One icon position inside the DMG window.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DmgContent {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Entry type (`link`); absent for the application itself.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Link target for `link` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl DmgContent {
    /// Position of the application icon.
    pub fn app(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            kind: None,
            path: None,
        }
    }

    /// Position of a drop link to `path`.
    pub fn link(x: i32, y: i32, path: &str) -> Self {
        Self {
            x,
            y,
            kind: Some("link".into()),
            path: Some(path.into()),
        }
    }
}
