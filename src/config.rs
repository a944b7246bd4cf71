//! Optional `codesim.toml` configuration.
//!
//! Every key is optional; missing keys take their defaults and command-line
//! flags override whatever the file sets.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::document::DEFAULT_MAX_FILE_SIZE;
use crate::error::ConfigError;
use crate::fingerprint::DEFAULT_K;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "codesim.toml";

/// Pairs scoring at or above this are flagged in reports.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Source extensions considered when walking directories.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cxx", "h", "hh", "hpp", "cs", "java", "kt", "kts", "scala", "go", "rs",
    "swift", "py", "rb", "php", "js", "jsx", "mjs", "cjs", "ts", "tsx", "dart",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// k-gram width used for hashing.
    pub k: usize,
    /// Similarity at or above which a pair is flagged.
    pub threshold: f64,
    /// Largest file, in bytes, that will be loaded.
    pub max_file_size: u64,
    /// Extensions (without the dot) picked up when walking directories.
    pub include_ext: Vec<String>,
    /// Glob patterns, relative to the walked directory, to skip.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            threshold: DEFAULT_THRESHOLD,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            include_ext: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load `explicit` if given, otherwise `codesim.toml` from the working
    /// directory when it exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k == 0 {
            return Err(ConfigError::Invalid("k must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Invalid(format!(
                "threshold must be between 0 and 1, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
