//! Build descriptor model and assembly.
//!
//! The descriptor mirrors the configuration document the packaging backend
//! consumes: a common block plus one section per platform or format.
//! [`assemble`] builds it from explicit inputs only.

mod builder;
mod common;
mod core;
mod linux;
mod macos;
mod naming;
mod package;
mod windows;

pub use builder::assemble;
pub use common::{CommonConfig, Directories, ElectronDownload, PlatformOverrides};
pub use core::{BuildDescriptor, PlannedArtifact};
pub use linux::{DesktopEntry, LinuxSettings};
pub use macos::{DmgContent, DmgSettings, DmgWindow, ExtendInfo, MacOsSettings};
pub use naming::{ArtifactNaming, ArtifactNamingTemplate, NamingContext};
pub use package::{CanonicalVersion, PackageSettings};
pub use windows::{NsisSettings, PortableSettings, WindowsSettings};
