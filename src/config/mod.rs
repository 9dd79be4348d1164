use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{Template, TemplateCatalog};
use crate::geometry::DEFAULT_GRID_SIZE;
use crate::policy::AreaLimits;
use crate::validation::{ValidationConfig, Validator};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

fn default_grid_size() -> f64 {
    DEFAULT_GRID_SIZE
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
        }
    }
}

/// Settings read from `zonegeo.toml`
///
/// ```toml
/// [validation]
/// max_points = 300
///
/// [snap]
/// grid_size = 0.00001
///
/// [limits]
/// zone_m2 = 250000.0
///
/// [[templates]]
/// id = "futsal"
/// name = "Futsal"
/// category = "football"
/// dimensions = { width_m = 20.0, length_m = 40.0 }
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub snap: SnapConfig,
    #[serde(default)]
    pub limits: AreaLimits,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl FileConfig {
    /// Search the default locations and load the first config that parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => {
                    tracing::debug!(?path, "loaded config file");
                    return Some(config);
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }
        None
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.validation)
    }

    /// Builtin templates plus the ones declared in the config file
    pub fn catalog(&self) -> TemplateCatalog {
        TemplateCatalog::with_additions(self.templates.clone())
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("zonegeo.toml"));
    paths.push(PathBuf::from(".zonegeo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("zonegeo").join("config.toml"));
        paths.push(config_dir.join("zonegeo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".zonegeo.toml"));
        paths.push(home.join(".config").join("zonegeo").join("config.toml"));
    }

    paths
}
