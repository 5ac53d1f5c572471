//! Platforms, packaging formats and the `format:arch` target unit.

use std::fmt;

use super::Arch;

/// Operating system family a target is built for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Platform {
    /// macOS
    Mac,
    /// Windows
    Win,
    /// Linux
    Linux,
}

impl Platform {
    /// Short name used by the backend's CLI (`--mac`, `--win`, `--linux`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Win => "win",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Packaging format produced by the backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PackageFormat {
    /// The backend's built-in default target set for the platform.
    Default,
    /// macOS disk image.
    Dmg,
    /// Windows NSIS installer.
    Nsis,
    /// Windows portable executable.
    Portable,
    /// Linux AppImage.
    AppImage,
    /// Debian package.
    Deb,
}

impl PackageFormat {
    /// Backend name of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dmg => "dmg",
            Self::Nsis => "nsis",
            Self::Portable => "portable",
            Self::AppImage => "AppImage",
            Self::Deb => "deb",
        }
    }

    /// File extension of the produced artifact.
    ///
    /// `None` for [`PackageFormat::Default`], whose concrete formats are
    /// chosen by the backend.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Dmg => Some("dmg"),
            Self::Nsis | Self::Portable => Some("exe"),
            Self::AppImage => Some("AppImage"),
            Self::Deb => Some("deb"),
        }
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `format:arch` unit of work within a platform.
///
/// `arch` is `None` only for [`PackageFormat::Default`], which lets the
/// backend pick architectures itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TargetSpec {
    /// Packaging format.
    pub format: PackageFormat,
    /// CPU architecture.
    pub arch: Option<Arch>,
}

impl TargetSpec {
    /// Concrete `format:arch` target.
    pub const fn new(format: PackageFormat, arch: Arch) -> Self {
        Self {
            format,
            arch: Some(arch),
        }
    }

    /// The backend's default target set.
    pub const fn backend_default() -> Self {
        Self {
            format: PackageFormat::Default,
            arch: None,
        }
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arch {
            Some(arch) => write!(f, "{}:{}", self.format, arch),
            None => write!(f, "{}", self.format),
        }
    }
}
