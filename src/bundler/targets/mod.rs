//! Release profile to target matrix resolution.
//!
//! [`resolve`] is a pure lookup: every [`ReleaseProfile`] variant has a
//! fixed, non-empty matrix, and unknown profile tags never reach this point
//! because [`ReleaseProfile::parse`] already mapped them to
//! [`ReleaseProfile::All`].

mod arch;
mod platform;
mod profile;

pub use arch::Arch;
pub use platform::{PackageFormat, Platform, TargetSpec};
pub use profile::ReleaseProfile;

use crate::bundler::{Error, Result};
use std::fmt;

use self::arch::Arch::{Arm64, Armv7l, Ia32, Universal, X64};
use self::platform::PackageFormat::{AppImage, Deb, Dmg, Nsis, Portable};

const MAC_DEFAULT: &[TargetSpec] = &[TargetSpec::backend_default()];
const MAC_DEV: &[TargetSpec] = &[TargetSpec::new(Dmg, X64), TargetSpec::new(Dmg, Arm64)];
const MAC_RELEASE: &[TargetSpec] = &[
    TargetSpec::new(Dmg, X64),
    TargetSpec::new(Dmg, Arm64),
    TargetSpec::new(Dmg, Universal),
];
const WIN_RELEASE: &[TargetSpec] = &[
    TargetSpec::new(Nsis, Ia32),
    TargetSpec::new(Nsis, X64),
    TargetSpec::new(Portable, Ia32),
];
const LINUX_ARM: &[TargetSpec] = &[
    TargetSpec::new(AppImage, Arm64),
    TargetSpec::new(Deb, Arm64),
    TargetSpec::new(AppImage, Armv7l),
    TargetSpec::new(Deb, Armv7l),
];
const LINUX_X64: &[TargetSpec] = &[TargetSpec::new(AppImage, X64), TargetSpec::new(Deb, X64)];

/// Targets requested for a single platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformTargets {
    /// Platform the targets build for.
    pub platform: Platform,
    /// Ordered `format:arch` targets.
    pub targets: Vec<TargetSpec>,
}

/// Ordered, platform-grouped set of release targets.
///
/// Never empty; each platform appears at most once and holds no duplicate
/// `format:arch` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetMatrix {
    entries: Vec<PlatformTargets>,
}

impl TargetMatrix {
    /// Builds a matrix, enforcing the grouping invariants.
    ///
    /// # Errors
    ///
    /// Fails if the matrix is empty, a platform repeats, a platform has no
    /// targets, or a platform lists the same target twice.
    pub fn new(entries: Vec<PlatformTargets>) -> Result<Self> {
        let invalid = |reason: String| Err(Error::Matrix(reason));

        if entries.is_empty() {
            return invalid("a release needs at least one platform".into());
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.platform == entry.platform) {
                return invalid(format!("platform {} listed more than once", entry.platform));
            }
            if entry.targets.is_empty() {
                return invalid(format!("platform {} has no targets", entry.platform));
            }
            for (j, target) in entry.targets.iter().enumerate() {
                if entry.targets[..j].contains(target) {
                    return invalid(format!("target {target} listed twice for {}", entry.platform));
                }
            }
        }
        Ok(Self { entries })
    }

    fn from_table(table: &[(Platform, &[TargetSpec])]) -> Self {
        Self {
            entries: table
                .iter()
                .map(|(platform, targets)| PlatformTargets {
                    platform: *platform,
                    targets: targets.to_vec(),
                })
                .collect(),
        }
    }

    /// Platform groups in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformTargets> {
        self.entries.iter()
    }

    /// Platforms in resolution order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.entries.iter().map(|e| e.platform)
    }

    /// Targets for `platform`, if it is part of the release.
    pub fn get(&self, platform: Platform) -> Option<&[TargetSpec]> {
        self.entries
            .iter()
            .find(|e| e.platform == platform)
            .map(|e| e.targets.as_slice())
    }

    /// Total number of targets across platforms.
    pub fn target_count(&self) -> usize {
        self.entries.iter().map(|e| e.targets.len()).sum()
    }
}

impl fmt::Display for TargetMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: [", entry.platform)?;
            for (j, target) in entry.targets.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{target}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Resolves a release profile into its target matrix.
pub fn resolve(profile: ReleaseProfile) -> TargetMatrix {
    match profile {
        ReleaseProfile::Mac => TargetMatrix::from_table(&[(Platform::Mac, MAC_DEFAULT)]),
        ReleaseProfile::MacDev => TargetMatrix::from_table(&[(Platform::Mac, MAC_DEV)]),
        ReleaseProfile::Win => TargetMatrix::from_table(&[(Platform::Win, WIN_RELEASE)]),
        ReleaseProfile::Linux => TargetMatrix::from_table(&[(Platform::Linux, LINUX_ARM)]),
        ReleaseProfile::All => TargetMatrix::from_table(&[
            (Platform::Mac, MAC_RELEASE),
            (Platform::Linux, LINUX_X64),
            (Platform::Win, WIN_RELEASE),
        ]),
    }
}
