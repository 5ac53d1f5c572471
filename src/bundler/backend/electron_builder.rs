//! `electron-builder` packaging backend.

use super::{PackagingBackend, write_descriptor};
use crate::bundler::{
    BackendFailure, Result,
    settings::BuildDescriptor,
    targets::{PlatformTargets, TargetMatrix},
};
use std::path::{Path, PathBuf};

/// Arguments for one platform's `electron-builder` run.
///
/// Example: `--mac dmg:x64 dmg:arm64 --config dist/builder-config.json
/// --projectDir . --publish never`
pub fn platform_args(
    group: &PlatformTargets,
    config_path: &Path,
    project_dir: &Path,
) -> Vec<String> {
    let mut args = vec![format!("--{}", group.platform)];
    args.extend(group.targets.iter().map(ToString::to_string));
    args.extend([
        "--config".to_string(),
        config_path.display().to_string(),
        "--projectDir".to_string(),
        project_dir.display().to_string(),
        "--publish".to_string(),
        "never".to_string(),
    ]);
    args
}

/// How `electron-builder` is started.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Invocation {
    program: PathBuf,
    leading_args: Vec<String>,
}

/// Runs `electron-builder` for each platform of the release.
///
/// Uses the project's `node_modules/.bin/electron-builder` when present,
/// then `electron-builder` on `PATH`, and finally `npx electron-builder`.
/// Platforms run one after another; a failed platform does not stop the
/// rest, and every target of a failed platform is reported.
#[derive(Debug, Clone)]
pub struct ElectronBuilderBackend {
    project_dir: PathBuf,
    program: Option<PathBuf>,
}

impl ElectronBuilderBackend {
    /// Creates a backend for the project at `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            program: None,
        }
    }

    /// Runs `program` instead of looking `electron-builder` up.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    fn invocation(&self) -> Invocation {
        if let Some(program) = &self.program {
            return Invocation {
                program: program.clone(),
                leading_args: Vec::new(),
            };
        }

        let local = self
            .project_dir
            .join("node_modules")
            .join(".bin")
            .join(if cfg!(windows) {
                "electron-builder.cmd"
            } else {
                "electron-builder"
            });
        if local.is_file() {
            log::debug!("Using project-local electron-builder: {}", local.display());
            return Invocation {
                program: local,
                leading_args: Vec::new(),
            };
        }

        if let Ok(path) = which::which("electron-builder") {
            log::debug!("Found electron-builder at: {}", path.display());
            return Invocation {
                program: path,
                leading_args: Vec::new(),
            };
        }

        // npm ships npx as npx.cmd on Windows, which only a PATHEXT-aware lookup finds
        let npx = which::which("npx").unwrap_or_else(|_| PathBuf::from("npx"));
        log::warn!(
            "electron-builder not found in node_modules or PATH, falling back to {}",
            npx.display()
        );
        Invocation {
            program: npx,
            leading_args: vec!["electron-builder".to_string()],
        }
    }
}

impl PackagingBackend for ElectronBuilderBackend {
    fn name(&self) -> &str {
        "electron-builder"
    }

    async fn package(&self, descriptor: &BuildDescriptor, targets: &TargetMatrix) -> Result<()> {
        let config_path = write_descriptor(&self.project_dir, descriptor)?;
        let invocation = self.invocation();
        let mut failure = BackendFailure::default();

        for group in targets.iter() {
            let args = platform_args(group, &config_path, &self.project_dir);
            let command_line = format!(
                "{} {}",
                invocation.program.display(),
                invocation
                    .leading_args
                    .iter()
                    .chain(&args)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            log::info!("Packaging {}: {}", group.platform, command_line);

            let status = tokio::process::Command::new(&invocation.program)
                .args(&invocation.leading_args)
                .args(&args)
                .current_dir(&self.project_dir)
                .status()
                .await;

            match status {
                Ok(status) if status.success() => {
                    log::info!("✓ {} targets packaged", group.platform);
                }
                Ok(status) => {
                    log::error!("electron-builder failed for {}: {}", group.platform, status);
                    failure.push_all(
                        group.platform,
                        &group.targets,
                        &format!("electron-builder exited with {status}"),
                    );
                }
                Err(e) => {
                    log::error!("Failed to start `{}`: {}", command_line, e);
                    failure.push_all(
                        group.platform,
                        &group.targets,
                        &format!("failed to start {}: {e}", invocation.program.display()),
                    );
                }
            }
        }

        if failure.is_empty() {
            Ok(())
        } else {
            Err(failure.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::targets::{ReleaseProfile, resolve};

    #[test]
    fn builds_per_platform_arguments() {
        let matrix = resolve(ReleaseProfile::Win);
        let group = matrix.iter().next().unwrap();

        let args = platform_args(
            group,
            Path::new("/work/dist/builder-config.json"),
            Path::new("/work"),
        );

        assert_eq!(
            args,
            [
                "--win",
                "nsis:ia32",
                "nsis:x64",
                "portable:ia32",
                "--config",
                "/work/dist/builder-config.json",
                "--projectDir",
                "/work",
                "--publish",
                "never",
            ]
        );
    }

    #[test]
    fn explicit_program_skips_lookup() {
        let backend = ElectronBuilderBackend::new("/work").with_program("/opt/eb/bin/eb");
        assert_eq!(
            backend.invocation(),
            Invocation {
                program: PathBuf::from("/opt/eb/bin/eb"),
                leading_args: Vec::new(),
            }
        );
    }

    #[test]
    fn project_local_builder_wins_over_path() {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("node_modules").join(".bin");
        std::fs::create_dir_all(&bin).unwrap();
        let local = bin.join(if cfg!(windows) {
            "electron-builder.cmd"
        } else {
            "electron-builder"
        });
        std::fs::write(&local, "").unwrap();

        let invocation = ElectronBuilderBackend::new(tmp.path()).invocation();

        assert_eq!(invocation.program, local);
        assert!(invocation.leading_args.is_empty());
    }

    #[test]
    fn backend_default_target_is_passed_by_name() {
        let matrix = resolve(ReleaseProfile::Mac);
        let group = matrix.iter().next().unwrap();

        let args = platform_args(group, Path::new("c.json"), Path::new("."));

        assert_eq!(&args[..2], ["--mac", "default"]);
    }
}
