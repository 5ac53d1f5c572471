//! Release profile selection.

use std::fmt;

/// Named request describing which platforms and architectures to build.
///
/// Parsing is total: anything unrecognised, including an unset value,
/// becomes [`ReleaseProfile::All`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum ReleaseProfile {
    /// macOS with the backend's default targets.
    Mac,
    /// macOS development build (x64 and arm64 DMGs only).
    MacDev,
    /// Windows installers and portable build.
    Win,
    /// Linux ARM packages.
    Linux,
    /// Every platform. Also the fallback for unknown profiles.
    #[default]
    All,
}

impl ReleaseProfile {
    /// Parses a profile tag, falling back to [`ReleaseProfile::All`].
    ///
    /// Tags are matched case-insensitively after trimming. `dev` and `macs`
    /// are accepted for [`ReleaseProfile::MacDev`], `windows` for
    /// [`ReleaseProfile::Win`].
    pub fn parse(tag: Option<&str>) -> Self {
        let Some(raw) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            log::warn!("No release profile set, building the full release matrix");
            return Self::All;
        };

        match raw.to_ascii_lowercase().as_str() {
            "mac" => Self::Mac,
            "macdev" | "dev" | "macs" => Self::MacDev,
            "win" | "windows" => Self::Win,
            "linux" => Self::Linux,
            "all" => Self::All,
            other => {
                log::warn!(
                    "Unrecognized release profile '{}', building the full release matrix",
                    other
                );
                Self::All
            }
        }
    }

    /// Canonical tag of this profile.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::MacDev => "macDev",
            Self::Win => "win",
            Self::Linux => "linux",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ReleaseProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_tags() {
        assert_eq!(ReleaseProfile::parse(Some("mac")), ReleaseProfile::Mac);
        assert_eq!(ReleaseProfile::parse(Some("macDev")), ReleaseProfile::MacDev);
        assert_eq!(ReleaseProfile::parse(Some("win")), ReleaseProfile::Win);
        assert_eq!(ReleaseProfile::parse(Some("linux")), ReleaseProfile::Linux);
        assert_eq!(ReleaseProfile::parse(Some("all")), ReleaseProfile::All);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(ReleaseProfile::parse(Some("dev")), ReleaseProfile::MacDev);
        assert_eq!(ReleaseProfile::parse(Some(" macs ")), ReleaseProfile::MacDev);
        assert_eq!(ReleaseProfile::parse(Some("Windows")), ReleaseProfile::Win);
    }

    #[test]
    fn unknown_and_unset_fall_back_to_all() {
        assert_eq!(ReleaseProfile::parse(None), ReleaseProfile::All);
        assert_eq!(ReleaseProfile::parse(Some("")), ReleaseProfile::All);
        assert_eq!(ReleaseProfile::parse(Some("freebsd")), ReleaseProfile::All);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for profile in [
            ReleaseProfile::Mac,
            ReleaseProfile::MacDev,
            ReleaseProfile::Win,
            ReleaseProfile::Linux,
            ReleaseProfile::All,
        ] {
            assert_eq!(ReleaseProfile::parse(Some(profile.name())), profile);
        }
    }
}
