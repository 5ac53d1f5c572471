//! Packaging backend interface.
//!
//! The backend turns a [`BuildDescriptor`] and a [`TargetMatrix`] into
//! installers. It is opaque to the pipeline: retries, signing and any
//! per-target concurrency are its own business.
//!
//! - [`ElectronBuilderBackend`] runs `electron-builder` once per platform
//! - [`DryRunBackend`] writes the descriptor and logs what would run

mod dry_run;
mod electron_builder;

pub use dry_run::DryRunBackend;
pub use electron_builder::{ElectronBuilderBackend, platform_args};

use crate::bundler::{
    Result,
    settings::BuildDescriptor,
    targets::TargetMatrix,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// File name of the descriptor written into the output directory.
pub const DESCRIPTOR_FILE: &str = "builder-config.json";

/// External system that packages resolved targets.
///
/// Implementations report per-target failures through
/// [`Error::Backend`](crate::bundler::Error::Backend).
#[allow(async_fn_in_trait)]
pub trait PackagingBackend {
    /// Human-readable backend name for logs.
    fn name(&self) -> &str;

    /// Packages every target in `targets` using `descriptor`.
    async fn package(&self, descriptor: &BuildDescriptor, targets: &TargetMatrix) -> Result<()>;
}

/// Writes `descriptor` as JSON into its output directory under `project_dir`.
///
/// Returns the path written.
pub fn write_descriptor(project_dir: &Path, descriptor: &BuildDescriptor) -> Result<PathBuf> {
    let path = project_dir
        .join(&descriptor.directories.output)
        .join(DESCRIPTOR_FILE);
    fs::write_file(&path, descriptor.to_json()?.as_bytes())?;
    log::debug!("Wrote build descriptor to {}", path.display());
    Ok(path)
}
