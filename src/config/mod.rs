#[cfg(feature = "cli")]
pub mod cli;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::session::{TastingFiles, ORDER_FILE, WINE_FILE};
use crate::report::REPORT_FILE;
use crate::utils::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "proeverij.toml";

/// Optional `proeverij.toml` settings; every missing field falls back to
/// the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub wine_file: Option<String>,
    pub order_file: Option<String>,
    pub report_file: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Loads `proeverij.toml` from the working directory when present;
    /// absence is the empty config, not an error.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings: built-in defaults, overridden by the config
/// file, overridden by command-line flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub wine_file: String,
    pub order_file: String,
    pub report_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            wine_file: WINE_FILE.to_string(),
            order_file: ORDER_FILE.to_string(),
            report_file: REPORT_FILE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn resolve(file: FileConfig, data_dir_override: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: data_dir_override
                .or(file.data_dir)
                .unwrap_or(defaults.data_dir),
            wine_file: file.wine_file.unwrap_or(defaults.wine_file),
            order_file: file.order_file.unwrap_or(defaults.order_file),
            report_file: file.report_file.unwrap_or(defaults.report_file),
        }
    }

    pub fn tasting_files(&self) -> TastingFiles {
        TastingFiles {
            wines: self.wine_file.clone(),
            orders: self.order_file.clone(),
        }
    }
}
