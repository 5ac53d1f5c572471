//! The build descriptor handed to the packaging backend.

use super::{
    ArtifactNamingTemplate, Directories, DmgSettings, ElectronDownload, LinuxSettings,
    MacOsSettings, NamingContext, NsisSettings, PortableSettings, WindowsSettings,
};
use crate::bundler::{
    Error, Result,
    targets::{PackageFormat, Platform, TargetMatrix, TargetSpec},
};
use std::fmt;

/// Fully resolved packaging configuration.
///
/// Constructed by [`assemble`](super::assemble) and never mutated by the
/// pipeline afterwards. Platform sections are optional so that a descriptor
/// can be checked against the resolved targets with
/// [`BuildDescriptor::ensure_covers`].
///
/// Serializes to the camelCase JSON document the backend reads.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    /// Application identifier.
    pub app_id: String,

    /// Product name.
    pub product_name: String,

    /// Copyright line.
    pub copyright: String,

    /// Fourth canonical version component.
    pub build_version: String,

    /// Three-component version, also written to the staged app manifest.
    #[serde(skip)]
    pub version: String,

    /// Directory layout.
    pub directories: Directories,

    /// Electron download settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electron_download: Option<ElectronDownload>,

    /// `mac` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<MacOsSettings>,

    /// `dmg` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dmg: Option<DmgSettings>,

    /// `win` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win: Option<WindowsSettings>,

    /// `nsis` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsis: Option<NsisSettings>,

    /// `portable` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portable: Option<PortableSettings>,

    /// `linux` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxSettings>,
}

/// Artifact a target is expected to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedArtifact {
    /// Platform of the target.
    pub platform: Platform,
    /// The target.
    pub target: TargetSpec,
    /// Rendered file name; `None` when the backend picks the formats.
    pub file_name: Option<String>,
    /// Template the backend names the artifact with.
    pub template: ArtifactNamingTemplate,
}

impl fmt::Display for PlannedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file_name {
            Some(name) => write!(f, "{} {}: {}", self.platform, self.target, name),
            None => write!(
                f,
                "{} {}: named by {}",
                self.platform,
                self.target,
                self.template.as_str()
            ),
        }
    }
}

impl BuildDescriptor {
    /// Serializes the descriptor as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn has_section(&self, section: &str) -> bool {
        match section {
            "mac" => self.mac.is_some(),
            "dmg" => self.dmg.is_some(),
            "win" => self.win.is_some(),
            "nsis" => self.nsis.is_some(),
            "portable" => self.portable.is_some(),
            "linux" => self.linux.is_some(),
            _ => false,
        }
    }

    /// Checks that every resolved target has the sections it builds from.
    ///
    /// # Errors
    ///
    /// [`Error::Resolution`] naming the first missing section.
    pub fn ensure_covers(&self, targets: &TargetMatrix) -> Result<()> {
        for group in targets.iter() {
            for target in &group.targets {
                for section in required_sections(group.platform, target.format) {
                    if !self.has_section(section) {
                        return Err(Error::Resolution {
                            platform: group.platform,
                            section,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Naming template the backend applies to `format` on `platform`.
    pub fn naming_template(
        &self,
        platform: Platform,
        format: PackageFormat,
    ) -> Option<&ArtifactNamingTemplate> {
        match (platform, format) {
            (Platform::Mac, PackageFormat::Dmg) => self.dmg.as_ref().map(|s| &s.artifact_name),
            (Platform::Mac, _) => self.mac.as_ref().map(|s| &s.artifact_name),
            (Platform::Win, PackageFormat::Portable) => {
                self.portable.as_ref().map(|s| &s.artifact_name)
            }
            (Platform::Win, _) => self.nsis.as_ref().map(|s| &s.artifact_name),
            (Platform::Linux, _) => self.linux.as_ref().map(|s| &s.artifact_name),
        }
    }

    /// Artifact names for every target, in matrix order.
    ///
    /// # Errors
    ///
    /// [`Error::Resolution`] if a target has no naming template, or
    /// [`Error::Template`] if a template cannot be fully rendered.
    pub fn planned_artifacts(&self, targets: &TargetMatrix) -> Result<Vec<PlannedArtifact>> {
        let build_version = self.build_version.as_str();
        let mut planned = Vec::with_capacity(targets.target_count());

        for group in targets.iter() {
            for target in &group.targets {
                let template = self
                    .naming_template(group.platform, target.format)
                    .ok_or(Error::Resolution {
                        platform: group.platform,
                        section: naming_section(group.platform, target.format),
                    })?;

                let file_name = match (target.arch, target.format.extension()) {
                    (Some(arch), Some(ext)) => Some(template.render(&NamingContext {
                        product_name: &self.product_name,
                        arch: arch.as_str(),
                        version: &self.version,
                        build_version,
                        ext,
                    })?),
                    _ => None,
                };

                planned.push(PlannedArtifact {
                    platform: group.platform,
                    target: *target,
                    file_name,
                    template: template.clone(),
                });
            }
        }

        Ok(planned)
    }
}

fn required_sections(platform: Platform, format: PackageFormat) -> Vec<&'static str> {
    let mut sections = vec![platform.as_str()];
    match format {
        PackageFormat::Dmg => sections.push("dmg"),
        PackageFormat::Nsis => sections.push("nsis"),
        PackageFormat::Portable => sections.push("portable"),
        PackageFormat::Default | PackageFormat::AppImage | PackageFormat::Deb => {}
    }
    sections
}

fn naming_section(platform: Platform, format: PackageFormat) -> &'static str {
    match (platform, format) {
        (Platform::Mac, PackageFormat::Dmg) => "dmg",
        (Platform::Mac, _) => "mac",
        (Platform::Win, PackageFormat::Portable) => "portable",
        (Platform::Win, _) => "nsis",
        (Platform::Linux, _) => "linux",
    }
}
