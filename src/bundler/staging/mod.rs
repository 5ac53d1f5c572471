//! Build tree staging.
//!
//! Runs before the backend is invoked:
//! 1. Clears and recreates the output directory
//! 2. Copies static assets into the build tree
//! 3. Writes the merged application manifest into the build tree
//!
//! Any failure aborts staging; a partially staged tree must never reach the
//! backend.

mod manifest;

pub use manifest::{Manifest, load_manifest, merge_manifests, write_manifest};

use crate::bundler::{
    Result,
    settings::{CanonicalVersion, Directories},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// One static file or directory copied into the build tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedAsset {
    /// Source, absolute or relative to the project root.
    pub source: PathBuf,
    /// Destination, absolute or relative to the project root.
    pub destination: PathBuf,
}

impl StagedAsset {
    /// Creates an asset entry.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Paths the staging pipeline reads and writes, all resolved against the
/// project root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagingLayout {
    /// Project root.
    pub root: PathBuf,
    /// Build tree the backend packages (`build/`).
    pub build_dir: PathBuf,
    /// Output directory the backend writes artifacts to (`dist/`).
    pub output_dir: PathBuf,
    /// Base manifest, authoritative for dependencies.
    pub base_manifest: PathBuf,
    /// Template manifest, authoritative for everything else.
    pub template_manifest: PathBuf,
    /// Where the merged manifest is written.
    pub staged_manifest: PathBuf,
    /// Assets to copy.
    pub assets: Vec<StagedAsset>,
}

impl StagingLayout {
    /// The standard layout under `root` with the default asset list.
    pub fn new(root: &Path, directories: &Directories) -> Self {
        let build_dir = root.join(&directories.app);
        Self {
            root: root.to_path_buf(),
            output_dir: root.join(&directories.output),
            base_manifest: root.join("package.json"),
            template_manifest: root.join("app").join("package.json"),
            staged_manifest: build_dir.join("package.json"),
            assets: vec![StagedAsset::new(
                "assets/app.png",
                Path::new(&directories.app).join("assets").join("app.png"),
            )],
            build_dir,
        }
    }

    /// Appends extra assets after the defaults.
    pub fn with_assets(mut self, assets: impl IntoIterator<Item = StagedAsset>) -> Self {
        self.assets.extend(assets);
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// Stages the build tree for `product_name` at `version`.
///
/// Idempotent: a second run leaves the same tree as the first.
///
/// # Errors
///
/// IOError for a missing asset or an unwritable directory, ConfigError for
/// a malformed manifest. Nothing after the failing step runs.
pub fn stage(layout: &StagingLayout, product_name: &str, version: &CanonicalVersion) -> Result<()> {
    log::info!("Cleaning output directory {}", layout.output_dir.display());
    fs::create_dir_all(&layout.output_dir, true)?;

    for asset in &layout.assets {
        let source = layout.resolve(&asset.source);
        let destination = layout.resolve(&asset.destination);
        log::debug!(
            "Copying asset {} -> {}",
            source.display(),
            destination.display()
        );
        fs::copy_path(&source, &destination)?;
    }

    let base = load_manifest(&layout.base_manifest)?;
    let template = load_manifest(&layout.template_manifest)?;
    let merged = merge_manifests(&base, template, product_name, version);

    write_manifest(&layout.staged_manifest, &merged)?;
    log::info!(
        "Wrote {} ({} {})",
        layout.staged_manifest.display(),
        product_name,
        version.version_string()
    );

    Ok(())
}
