//! Configuration loading and data file resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the decomposition source path
pub const ENV_IDS_SOURCE: &str = "KANJI_IDS_SOURCE";
/// Environment variable overriding the radical reference path
pub const ENV_RADICALS: &str = "KANJI_RADICALS";

/// Default file name of the tab-separated decomposition source
pub const DEFAULT_IDS_FILE: &str = "Unihan_CJKVI_database.txt";
/// Default file name of the radical reference list
pub const DEFAULT_RADICALS_FILE: &str = "kangxi_radicals.json";

const APP_DIR: &str = "kanji-tree";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Tab-separated decomposition source
    pub ids_source: Option<PathBuf>,
    /// Radical reference list (JSON)
    pub radicals: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `[metrics]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Decimal places kept in normalized percentile ranks
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Upper bound on nodes in one resolved tree
    #[serde(default = "default_max_tree_nodes")]
    pub max_tree_nodes: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            max_tree_nodes: default_max_tree_nodes(),
        }
    }
}

fn default_precision() -> u32 {
    4
}

fn default_max_tree_nodes() -> usize {
    100_000
}

/// Parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Platform configuration file path (`<config_dir>/kanji-tree/config.toml`)
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

/// Load configuration, degrading to defaults when the file is missing or
/// unreadable
///
/// An explicit path is tried first; otherwise the platform default location.
pub fn load_config_or_default(explicit: Option<&Path>) -> TomlConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Ok(path) if path.exists() => path,
            Ok(path) => {
                debug!("No config file at {}, using defaults", path.display());
                return TomlConfig::default();
            }
            Err(e) => {
                debug!("{}, using defaults", e);
                return TomlConfig::default();
            }
        },
    };

    match load_toml_config(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load config {}: {} (using defaults)", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Resolve one data file path
///
/// Priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file value
/// 4. OS-dependent data directory default (fallback)
pub fn resolve_data_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config_value: Option<&Path>,
    default_file: &str,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = config_value {
        return path.to_path_buf();
    }

    // Priority 4: OS-dependent default
    default_data_dir().join(default_file)
}

/// Locations of the two input sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub ids_source: PathBuf,
    pub radicals: PathBuf,
}

impl DataPaths {
    pub fn resolve(cli_ids: Option<&Path>, cli_radicals: Option<&Path>, config: &TomlConfig) -> Self {
        Self {
            ids_source: resolve_data_path(
                cli_ids,
                ENV_IDS_SOURCE,
                config.ids_source.as_deref(),
                DEFAULT_IDS_FILE,
            ),
            radicals: resolve_data_path(
                cli_radicals,
                ENV_RADICALS,
                config.radicals.as_deref(),
                DEFAULT_RADICALS_FILE,
            ),
        }
    }
}

/// OS-dependent default data folder
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("./kanji_data"))
}
