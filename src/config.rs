// src/config.rs
use crate::export::ExportFormat;
use crate::paginate::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_VAR: &str = "OFFSET_CONFIG";
const DEFAULT_CONFIG_NAME: &str = "offset";
const ENV_PREFIX: &str = "OFFSET";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub dashboard: DashboardConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON catalog to load instead of the embedded one.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_size: PageSize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("certificates"),
            format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Layers built-in defaults, `offset.toml` (or the file named by
    /// `OFFSET_CONFIG`) and `OFFSET__*` environment variables, in that order.
    /// Nested keys use `__` too, e.g. `OFFSET__DASHBOARD__PAGE_SIZE=50`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.is_empty() => {
                log::debug!("Loading configuration from {}", path);
                builder = builder.add_source(config::File::from(PathBuf::from(path)).required(true));
            }
            _ => {
                builder = builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false));
            }
        }

        builder = builder.add_source(environment());

        builder.build()?.try_deserialize()
    }

    /// Reads a single configuration file, without environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .build()?
            .try_deserialize()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
