//! Release orchestration.
//!
//! This module provides the [`ReleaseBuilder`] orchestrator that sequences
//! staging, planning, packaging and the post-build hook.

use super::MakeConfig;
use crate::{
    bundler::{
        Error, Result,
        backend::PackagingBackend,
        settings::{BuildDescriptor, PlannedArtifact, assemble},
        staging,
        targets::{Platform, ReleaseProfile, TargetMatrix, resolve},
    },
    metadata::{self, ProjectMetadata},
};
use std::fmt;

/// Pipeline phase, used to label log lines and failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Project loading and staging.
    BeforeMake,
    /// Target resolution and descriptor assembly.
    Plan,
    /// Backend invocation.
    Make,
    /// Post-build hook.
    AfterMake,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BeforeMake => "beforeMake",
            Self::Plan => "plan",
            Self::Make => "make",
            Self::AfterMake => "afterMake",
        };
        f.write_str(name)
    }
}

/// Resolved targets and the descriptor built for them.
#[derive(Clone, Debug)]
pub struct ReleasePlan {
    /// Targets to build.
    pub targets: TargetMatrix,
    /// Descriptor handed to the backend.
    pub descriptor: BuildDescriptor,
    /// Expected artifacts, in target order.
    pub artifacts: Vec<PlannedArtifact>,
}

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct MakeSummary {
    /// Profile that was built.
    pub profile: ReleaseProfile,
    /// Backend that packaged the release.
    pub backend: String,
    /// Targets that were built.
    pub targets: TargetMatrix,
    /// Artifacts the backend was asked to produce.
    pub artifacts: Vec<PlannedArtifact>,
}

/// Main release orchestrator.
///
/// Phases run strictly in order and the first failure stops the run:
///
/// 1. `beforeMake` - load the project and stage the build tree
/// 2. `plan` - resolve targets and assemble the descriptor
/// 3. `make` - hand both to the [`PackagingBackend`] and await it
/// 4. `afterMake` - post-build hook
///
/// # Examples
///
/// ```no_run
/// use switchhosts_make::bundler::{DryRunBackend, MakeConfig, ReleaseBuilder, ReleaseProfile};
///
/// # async fn example() -> switchhosts_make::bundler::Result<()> {
/// let config = MakeConfig::new(ReleaseProfile::Win, ".", 2026);
/// let builder = ReleaseBuilder::new(config, DryRunBackend::new("."));
/// let summary = builder.run().await?;
/// for artifact in &summary.artifacts {
///     println!("{artifact}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReleaseBuilder<B> {
    config: MakeConfig,
    backend: B,
}

impl<B: PackagingBackend> ReleaseBuilder<B> {
    /// Creates an orchestrator for `config` packaging through `backend`.
    pub fn new(config: MakeConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs every phase in order.
    ///
    /// # Errors
    ///
    /// The first failing phase's error. The failure is logged with the
    /// profile and phase (and target, for backend failures) before it is
    /// returned; partially produced artifacts are left in place.
    pub async fn run(&self) -> Result<MakeSummary> {
        log::info!(
            "Release profile '{}' in {}",
            self.config.profile,
            self.config.root.display()
        );

        let project = self.checked(Phase::BeforeMake, self.before_make())?;
        let plan = self.checked(Phase::Plan, self.plan(&project))?;
        self.checked(Phase::Make, self.make(&plan).await)?;
        self.checked(Phase::AfterMake, self.after_make(&plan))?;

        log::info!("-> make Done!");
        Ok(MakeSummary {
            profile: self.config.profile,
            backend: self.backend.name().to_string(),
            targets: plan.targets,
            artifacts: plan.artifacts,
        })
    }

    /// Loads the project inputs and stages the build tree.
    pub fn before_make(&self) -> Result<ProjectMetadata> {
        log::info!("-> {}...", Phase::BeforeMake);
        let project = metadata::load_project(&self.config.root)?;
        let layout = project.staging_layout(&self.config.root);
        staging::stage(&layout, project.product_name(), &project.version)?;
        Ok(project)
    }

    /// Resolves targets and assembles a descriptor that covers them.
    pub fn plan(&self, project: &ProjectMetadata) -> Result<ReleasePlan> {
        let targets = resolve(self.config.profile);
        log::info!("Targets: {}", targets);

        let common =
            project.common_config(self.config.copyright_year, self.config.home_dir.as_deref());
        let descriptor = assemble(
            &common,
            self.config.identity.as_deref(),
            &project.languages(),
        );
        descriptor.ensure_covers(&targets)?;

        if self.config.identity.is_none() && targets.get(Platform::Mac).is_some() {
            log::warn!("No signing identity set (IDENTITY); macOS signing is left to the backend");
        }

        let artifacts = descriptor.planned_artifacts(&targets)?;
        Ok(ReleasePlan {
            targets,
            descriptor,
            artifacts,
        })
    }

    /// Hands the plan to the backend and waits for it to finish.
    pub async fn make(&self, plan: &ReleasePlan) -> Result<()> {
        log::info!("-> {}... ({})", Phase::Make, self.backend.name());
        self.backend.package(&plan.descriptor, &plan.targets).await
    }

    /// Post-build hook. Currently only reports completion.
    pub fn after_make(&self, plan: &ReleasePlan) -> Result<()> {
        log::info!("-> {}...", Phase::AfterMake);
        log::debug!("{} target(s) handed to the backend", plan.targets.target_count());
        Ok(())
    }

    fn checked<T>(&self, phase: Phase, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            self.log_failure(phase, err);
        }
        result
    }

    fn log_failure(&self, phase: Phase, err: &Error) {
        let profile = self.config.profile;
        match err {
            Error::Backend(failure) => {
                for target in &failure.failures {
                    log::error!(
                        "{} failed [profile {}, target {} {}]: {}",
                        phase,
                        profile,
                        target.platform,
                        target.target,
                        target.reason
                    );
                }
            }
            _ => log::error!("{} failed [profile {}] {}: {}", phase, profile, err.kind(), err),
        }
    }
}
