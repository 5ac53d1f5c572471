//! Command line interface for the release orchestrator.
//!
//! A single command with no subcommands: options select the profile and
//! project, the pipeline does the rest.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{
    DryRunBackend, ElectronBuilderBackend, MakeSummary, PackagingBackend, ReleaseBuilder,
};
use crate::error::{CliError, Result};
use anyhow::Context;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let mut args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    args.root = std::path::absolute(&args.root)
        .with_context(|| format!("resolving project root {}", args.root.display()))?;
    let config = RuntimeConfig::from(&args);
    execute(&config).await
}

/// Runs the pipeline for an already parsed configuration.
pub async fn execute(config: &RuntimeConfig) -> Result<i32> {
    let make = config.make().clone();
    config.section(&format!("Release: {}", make.profile))?;
    config.verbose(&format!("project root: {}", make.root.display()))?;

    let summary = if config.dry_run() {
        config.warn("dry run: electron-builder will not be started")?;
        let backend = DryRunBackend::new(&make.root);
        drive(ReleaseBuilder::new(make, backend)).await?
    } else {
        let backend = ElectronBuilderBackend::new(&make.root);
        drive(ReleaseBuilder::new(make, backend)).await?
    };

    report(config, &summary)?;
    Ok(0)
}

async fn drive<B: PackagingBackend>(builder: ReleaseBuilder<B>) -> Result<MakeSummary> {
    Ok(builder.run().await?)
}

fn report(config: &RuntimeConfig, summary: &MakeSummary) -> std::io::Result<()> {
    config.progress(&format!("targets: {}", summary.targets))?;
    for artifact in &summary.artifacts {
        config.indent(&artifact.to_string())?;
    }
    config.success(&format!(
        "make Done! ({} target(s) via {})",
        summary.targets.target_count(),
        summary.backend
    ))
}
