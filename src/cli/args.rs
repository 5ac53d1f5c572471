//! Command line argument parsing and validation.
//!
//! Every option can also come from the environment, which is how CI drives
//! the release: `MAKE_FOR` picks the profile, `IDENTITY` the signing
//! identity.

use crate::bundler::{MakeConfig, ReleaseProfile};
use chrono::Datelike;
use clap::Parser;
use std::path::PathBuf;

/// Release orchestrator for the desktop application
#[derive(Parser, Debug)]
#[command(
    name = "switchhosts_make",
    version,
    about = "Stages the build tree and packages a release",
    long_about = "Resolves a release profile into targets, stages the build tree, assembles the
packaging descriptor and runs electron-builder.

Usage:
  MAKE_FOR=win switchhosts_make
  MAKE_FOR=macDev IDENTITY=\"Developer ID Application: ...\" switchhosts_make
  switchhosts_make --profile linux --root ../SwitchHosts --dry-run

Unknown or unset profiles build every platform. Exit code 0 = every target packaged."
)]
pub struct Args {
    /// Release profile: mac, macDev (dev), win, linux, all
    #[arg(short, long, env = "MAKE_FOR", value_name = "PROFILE")]
    pub profile: Option<String>,

    /// macOS code signing identity
    #[arg(long, env = "IDENTITY", hide_env_values = true, value_name = "IDENTITY")]
    pub identity: Option<String>,

    /// Project root containing package.json, app/ and src/version.json
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Stage and write the descriptor without running electron-builder
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.root.is_dir() {
            return Err(format!(
                "Project root is not a directory: {}",
                self.root.display()
            ));
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Inputs handed to the pipeline
    make: MakeConfig,

    /// Skip the real backend
    dry_run: bool,

    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let make = MakeConfig::new(
            ReleaseProfile::parse(args.profile.as_deref()),
            args.root.clone(),
            chrono::Local::now().year(),
        )
        .with_identity(args.identity.clone())
        .with_home_dir(dirs::home_dir());

        let output = super::OutputManager::new(
            true,  // Always verbose
            false, // Never quiet
        );

        Self {
            make,
            dry_run: args.dry_run,
            output,
        }
    }
}

impl RuntimeConfig {
    /// Inputs for the release pipeline
    pub fn make(&self) -> &MakeConfig {
        &self.make
    }

    /// Whether the backend should be skipped
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Print a detail line (verbose mode only)
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
