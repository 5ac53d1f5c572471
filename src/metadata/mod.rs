//! Project inputs read from disk: the canonical version and `make.toml`.

use crate::bundler::{
    Error, Result,
    error::ErrorExt,
    settings::{
        CanonicalVersion, CommonConfig, Directories, ElectronDownload, PackageSettings,
        PlatformOverrides,
    },
    staging::{StagedAsset, StagingLayout},
};
use std::path::{Path, PathBuf};

/// Canonical version descriptor, relative to the project root.
pub const VERSION_FILE: &str = "src/version.json";

/// Optional project configuration, relative to the project root.
pub const CONFIG_FILE: &str = "make.toml";

const DEFAULT_PRODUCT_NAME: &str = "SwitchHosts";
const DEFAULT_LANGUAGES: [&str; 4] = ["en", "fr", "zh_CN", "de"];
const DEFAULT_ELECTRON_MIRROR: &str = "https://npm.taobao.org/mirrors/electron/";

/// Overrides from `make.toml`. Every field is optional.
///
/// # Configuration
///
/// ```toml
/// product_name = "SwitchHosts"
/// languages = ["en", "fr", "zh_CN", "de"]
/// linux_category = "Utility"
/// electron_mirror = "https://npmmirror.com/mirrors/electron/"
///
/// [[assets]]
/// source = "assets/tray"
/// destination = "build/assets/tray"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Product name. Default: "SwitchHosts"
    #[serde(default)]
    pub product_name: Option<String>,

    /// Application identifier. Default: the product name
    #[serde(default)]
    pub app_id: Option<String>,

    /// Localizations shipped in the macOS bundle.
    #[serde(default)]
    pub languages: Option<Vec<String>>,

    /// Product summary for Linux packages.
    #[serde(default)]
    pub synopsis: Option<String>,

    /// macOS LSApplicationCategoryType.
    #[serde(default)]
    pub mac_category: Option<String>,

    /// freedesktop.org category.
    #[serde(default)]
    pub linux_category: Option<String>,

    /// Electron download mirror.
    #[serde(default)]
    pub electron_mirror: Option<String>,

    /// Electron download cache. Default: `~/.electron`
    #[serde(default)]
    pub electron_cache: Option<PathBuf>,

    /// Extra assets staged after the defaults.
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

/// One `[[assets]]` entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    /// Source, relative to the project root.
    pub source: PathBuf,
    /// Destination, relative to the project root.
    pub destination: PathBuf,
}

/// Everything read from the project before staging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Canonical version.
    pub version: CanonicalVersion,
    /// `make.toml` overrides (defaults if the file is absent).
    pub config: ProjectConfig,
}

impl ProjectMetadata {
    /// Product name after overrides.
    pub fn product_name(&self) -> &str {
        self.config
            .product_name
            .as_deref()
            .unwrap_or(DEFAULT_PRODUCT_NAME)
    }

    /// Localization list after overrides.
    pub fn languages(&self) -> Vec<String> {
        match &self.config.languages {
            Some(languages) => languages.clone(),
            None => DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Builds the assembler's common inputs.
    ///
    /// `home_dir` only feeds the default Electron cache location; without it
    /// (and without an explicit cache) the download block is omitted.
    pub fn common_config(&self, copyright_year: i32, home_dir: Option<&Path>) -> CommonConfig {
        let product_name = self.product_name().to_string();
        let defaults = PlatformOverrides::default();

        let cache = self
            .config
            .electron_cache
            .clone()
            .or_else(|| home_dir.map(|home| home.join(".electron")));

        CommonConfig {
            package: PackageSettings {
                app_id: self
                    .config
                    .app_id
                    .clone()
                    .unwrap_or_else(|| product_name.clone()),
                product_name,
                version: self.version.clone(),
            },
            copyright_year,
            directories: Directories::default(),
            electron_download: cache.map(|cache| ElectronDownload {
                cache,
                mirror: self
                    .config
                    .electron_mirror
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ELECTRON_MIRROR.to_string()),
            }),
            overrides: PlatformOverrides {
                mac_category: self
                    .config
                    .mac_category
                    .clone()
                    .unwrap_or(defaults.mac_category),
                linux_category: self
                    .config
                    .linux_category
                    .clone()
                    .unwrap_or(defaults.linux_category),
                synopsis: self.config.synopsis.clone().unwrap_or(defaults.synopsis),
            },
        }
    }

    /// Staging layout under `root`, default assets first.
    pub fn staging_layout(&self, root: &Path) -> StagingLayout {
        StagingLayout::new(root, &Directories::default()).with_assets(
            self.config
                .assets
                .iter()
                .map(|a| StagedAsset::new(&a.source, &a.destination)),
        )
    }
}

/// Loads the version descriptor and `make.toml` from `root`.
pub fn load_project(root: &Path) -> Result<ProjectMetadata> {
    let version = load_version(&root.join(VERSION_FILE))?;
    let config = load_project_config(&root.join(CONFIG_FILE))?;
    log::info!("{} {}", config.product_name.as_deref().unwrap_or(DEFAULT_PRODUCT_NAME), version);
    Ok(ProjectMetadata { version, config })
}

/// Reads a canonical version descriptor: a JSON array of at least four
/// non-negative integers.
pub fn load_version(path: &Path) -> Result<CanonicalVersion> {
    let raw = std::fs::read_to_string(path).fs_context("reading version descriptor", path)?;

    let components: Vec<u64> = serde_json::from_str(&raw).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: format!("expected an array of non-negative integers: {e}"),
    })?;

    let count = components.len();
    CanonicalVersion::new(components).ok_or_else(|| Error::Config {
        path: path.to_path_buf(),
        reason: format!(
            "expected at least {} version components, found {}",
            CanonicalVersion::MIN_COMPONENTS,
            count
        ),
    })
}

/// Reads `make.toml`; a missing file yields the defaults.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        log::debug!("No {} at {}, using defaults", CONFIG_FILE, path.display());
        return Ok(ProjectConfig::default());
    }

    let raw = std::fs::read_to_string(path).fs_context("reading project config", path)?;
    toml::from_str(&raw).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
