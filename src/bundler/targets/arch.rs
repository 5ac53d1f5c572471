//! CPU architecture names understood by the packaging backend.

use std::fmt;

/// CPU architecture of a release target.
///
/// Names follow the backend's vocabulary (`x64`, `ia32`, ...) rather than
/// Rust target triples, because they end up verbatim in artifact names.
///
/// # Platform Support
///
/// - macOS: X64, Arm64, Universal
/// - Windows: X64, Ia32
/// - Linux: X64, Arm64, Armv7l
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X64,
    /// x86 / i686 (32-bit)
    Ia32,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM devices
    Arm64,
    /// ARMv7 hard-float (32-bit) - Raspberry Pi and embedded ARM
    Armv7l,
    /// macOS universal binary - Contains both x64 and arm64
    Universal,
}

impl Arch {
    /// Backend name of this architecture.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Ia32 => "ia32",
            Self::Arm64 => "arm64",
            Self::Armv7l => "armv7l",
            Self::Universal => "universal",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
