//! Release orchestrator for the SwitchHosts desktop application
//!
//! This library resolves a release profile into a target matrix, stages the
//! build tree, assembles the packaging descriptor and drives an external
//! packaging backend:
//! - macOS: dmg (x64, arm64, universal) or the backend defaults
//! - Windows: NSIS installers and a portable executable
//! - Linux: AppImage and deb
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{CliError, MakeError, Result};
