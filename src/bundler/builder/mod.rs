//! Release orchestration and coordination.
//!
//! This module provides the main [`ReleaseBuilder`] orchestrator that
//! drives a release from a profile to installers.
//!
//! # Overview
//!
//! The builder:
//! 1. Loads `src/version.json` and `make.toml` from the project root
//! 2. Stages the build tree (clean output, copy assets, merge manifest)
//! 3. Resolves targets and assembles the build descriptor
//! 4. Delegates packaging to a [`PackagingBackend`](crate::bundler::PackagingBackend)
//! 5. Runs the post-build hook and returns a [`MakeSummary`]
//!
//! # Module Organization
//!
//! - [`config`] - [`MakeConfig`], inputs captured once at startup
//! - [`orchestrator`] - [`ReleaseBuilder`] and its phases

mod config;
mod orchestrator;

pub use config::MakeConfig;
pub use orchestrator::{MakeSummary, Phase, ReleaseBuilder, ReleasePlan};
