//! Artifact naming templates.
//!
//! Templates use the backend's `${placeholder}` syntax. Rendering is strict:
//! every placeholder must be known, so an artifact name never depends on a
//! backend default.

use crate::bundler::{Error, Result};

/// Values substituted into an [`ArtifactNamingTemplate`].
#[derive(Clone, Copy, Debug)]
pub struct NamingContext<'a> {
    /// `${productName}`
    pub product_name: &'a str,
    /// `${arch}`
    pub arch: &'a str,
    /// `${version}`, the three-component version.
    pub version: &'a str,
    /// `${buildVersion}`, the fourth version component.
    pub build_version: &'a str,
    /// `${ext}`, without the leading dot.
    pub ext: &'a str,
}

impl NamingContext<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "productName" => Some(self.product_name),
            "arch" => Some(self.arch),
            "version" => Some(self.version),
            "buildVersion" => Some(self.build_version),
            "ext" => Some(self.ext),
            _ => None,
        }
    }
}

/// Filename template for one platform-format family.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ArtifactNamingTemplate(String);

impl ArtifactNamingTemplate {
    /// Wraps a raw template string.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// `${productName}_<family>_${arch}_${version}(${buildVersion}).${ext}`
    pub fn for_family(family: &str) -> Self {
        Self(format!(
            "${{productName}}_{family}_${{arch}}_${{version}}(${{buildVersion}}).${{ext}}"
        ))
    }

    /// The raw template.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes every placeholder.
    ///
    /// # Errors
    ///
    /// [`Error::Template`] on an unknown placeholder or a `${` without a
    /// closing brace.
    pub fn render(&self, ctx: &NamingContext<'_>) -> Result<String> {
        let mut out = String::with_capacity(self.0.len() + 32);
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find('}').ok_or_else(|| Error::Template {
                template: self.0.clone(),
                reason: "unterminated `${` placeholder".into(),
            })?;
            let name = &after[..end];
            let value = ctx.lookup(name).ok_or_else(|| Error::Template {
                template: self.0.clone(),
                reason: format!("unknown placeholder `{name}`"),
            })?;
            out.push_str(value);
            rest = &after[end + 1..];
        }
        out.push_str(rest);

        Ok(out)
    }
}

/// The naming templates of every platform-format family.
///
/// Built once per descriptor and cloned into each section that names
/// artifacts, so all formats share one naming scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactNaming {
    /// macOS (dmg and backend-default mac targets).
    pub mac: ArtifactNamingTemplate,
    /// Windows NSIS installer.
    pub windows_installer: ArtifactNamingTemplate,
    /// Windows portable executable.
    pub windows_portable: ArtifactNamingTemplate,
    /// Linux AppImage and deb.
    pub linux: ArtifactNamingTemplate,
}

impl ArtifactNaming {
    /// The release naming scheme.
    pub fn standard() -> Self {
        Self {
            mac: ArtifactNamingTemplate::for_family("mac"),
            windows_installer: ArtifactNamingTemplate::for_family("installer"),
            windows_portable: ArtifactNamingTemplate::for_family("portable"),
            linux: ArtifactNamingTemplate::for_family("linux"),
        }
    }
}
