//! Configuration loading from the filesystem.
//!
//! Configuration is read from `~/.rawtx/config.toml` by default, or from an
//! explicit file given with `--config`. [`ConfigLoader::load`] falls back to
//! the built-in defaults when the file is missing;
//! [`ConfigLoader::load_required`] does not.
//!
//! # Examples
//!
//! ```no_run
//! use rawtx_core::config_loader::ConfigLoader;
//!
//! let loader = ConfigLoader::new().expect("failed to create loader");
//! let config = loader.load().expect("failed to load config");
//! println!("chain id: {}", config.network.chain_id);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ConfigError;

/// The default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// The default base directory name within the home directory.
const BASE_DIR_NAME: &str = ".rawtx";

/// Locates and reads the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for `~/.rawtx/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if the home directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_base_dir(default_base_dir()?))
    }

    /// Creates a loader for `config.toml` inside a custom base directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawtx_core::config_loader::ConfigLoader;
    /// use std::path::PathBuf;
    ///
    /// let loader = ConfigLoader::with_base_dir(PathBuf::from("/etc/rawtx"));
    /// assert_eq!(loader.config_path(), PathBuf::from("/etc/rawtx/config.toml"));
    /// ```
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            config_path: base_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Creates a loader for an explicit configuration file.
    #[must_use]
    pub fn from_file(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Returns the path to the configuration file.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Checks if the configuration file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Loads and validates the configuration.
    ///
    /// Returns the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] if the file contains invalid TOML.
    /// Returns [`ConfigError::InvalidValue`] if validation fails.
    /// Returns [`ConfigError::Io`] if there's an I/O error reading the file.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.exists() {
            return Ok(Config::default());
        }

        Self::load_from_path(&self.config_path)
    }

    /// Loads and validates the configuration, failing if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if the configuration file doesn't exist,
    /// and otherwise the same errors as [`load`](Self::load).
    pub fn load_required(&self) -> Result<Config, ConfigError> {
        if !self.exists() {
            return Err(ConfigError::file_not_found(
                self.config_path.display().to_string(),
            ));
        }

        Self::load_from_path(&self.config_path)
    }

    fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::io(
                format!("failed to read configuration from {}", path.display()),
                e,
            )
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::parse_failed(format!("{}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }
}

/// Returns the default base directory (`~/.rawtx`).
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the home directory cannot be determined.
pub fn default_base_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(BASE_DIR_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}
