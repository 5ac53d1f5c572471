//! Backend that stops short of packaging.

use super::{PackagingBackend, platform_args, write_descriptor};
use crate::bundler::{Result, settings::BuildDescriptor, targets::TargetMatrix};
use std::path::PathBuf;

/// Writes the descriptor and logs the `electron-builder` runs it would make.
#[derive(Debug, Clone)]
pub struct DryRunBackend {
    project_dir: PathBuf,
}

impl DryRunBackend {
    /// Creates a dry-run backend for the project at `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }
}

impl PackagingBackend for DryRunBackend {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn package(&self, descriptor: &BuildDescriptor, targets: &TargetMatrix) -> Result<()> {
        let config_path = write_descriptor(&self.project_dir, descriptor)?;
        for group in targets.iter() {
            let args = platform_args(group, &config_path, &self.project_dir);
            log::info!("[dry-run] electron-builder {}", args.join(" "));
        }
        Ok(())
    }
}
