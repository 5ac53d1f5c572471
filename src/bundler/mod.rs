//! Release pipeline: target resolution, descriptor assembly, staging and
//! backend orchestration.
//!
//! # Example
//!
//! ```no_run
//! use switchhosts_make::bundler::{
//!     ElectronBuilderBackend, MakeConfig, ReleaseBuilder, ReleaseProfile,
//! };
//!
//! # async fn example() -> switchhosts_make::bundler::Result<()> {
//! let config = MakeConfig::new(ReleaseProfile::parse(Some("macDev")), ".", 2026)
//!     .with_identity(std::env::var("IDENTITY").ok());
//!
//! let summary = ReleaseBuilder::new(config, ElectronBuilderBackend::new("."))
//!     .run()
//!     .await?;
//! println!("Built {} target(s)", summary.targets.target_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`targets`] - release profiles and the target matrix
//! - [`settings`] - build descriptor model and [`assemble`]
//! - [`staging`] - build tree preparation
//! - [`backend`] - packaging backend seam
//! - [`builder`] - [`ReleaseBuilder`] orchestration

pub mod backend;
pub mod builder;
pub mod error;
pub mod settings;
pub mod staging;
pub mod targets;
pub mod utils;

pub use backend::{DryRunBackend, ElectronBuilderBackend, PackagingBackend};
pub use builder::{MakeConfig, MakeSummary, Phase, ReleaseBuilder, ReleasePlan};
pub use error::{BackendFailure, Error, ErrorKind, Result, TargetFailure};
pub use settings::{BuildDescriptor, CanonicalVersion, CommonConfig, PlannedArtifact, assemble};
pub use staging::{StagedAsset, StagingLayout, stage};
pub use targets::{
    Arch, PackageFormat, Platform, PlatformTargets, ReleaseProfile, TargetMatrix, TargetSpec,
    resolve,
};
