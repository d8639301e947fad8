//! Runtime configuration for mining runs.
//!
//! Configuration is JSON. Every field is optional:
//!
//! ```json
//! {
//!   "working_directory": "/var/lib/apiminer",
//!   "dependency_archive_extension": ".jar",
//!   "similarity": { "tokenization": "character_bigrams" },
//!   "logging": { "level": "debug", "json": true }
//! }
//! ```
//!
//! [`MinerConfig::with_env_overrides`] then applies
//! `APIMINER_WORKING_DIRECTORY` and `APIMINER_LOG_LEVEL`.

use crate::acquisition::services::DEFAULT_ARCHIVE_EXTENSION;
use crate::dedup::domain::Tokenization;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding [`MinerConfig::working_directory`].
pub const WORKING_DIRECTORY_ENV: &str = "APIMINER_WORKING_DIRECTORY";

/// Environment variable overriding [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "APIMINER_LOG_LEVEL";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read configuration file {path}")]
    Read {
        /// Configuration file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`MinerConfig`].
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinerConfig {
    /// Staging root handed to downloaders.
    pub working_directory: Utf8PathBuf,
    /// Extension of dependency archives scanned in source trees.
    pub dependency_archive_extension: String,
    /// Near-duplicate detection settings.
    pub similarity: SimilarityConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Near-duplicate detection settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimilarityConfig {
    /// Tokens the cosine similarity is computed over.
    pub tokenization: Tokenization,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    pub level: String,
    /// Emit newline-delimited JSON instead of plain text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            working_directory: default_working_directory(),
            dependency_archive_extension: DEFAULT_ARCHIVE_EXTENSION.to_owned(),
            similarity: SimilarityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MinerConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`MinerConfig::from_json_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::Invalid(format!("{path} does not name a file")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&contents)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when an override is out of range.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, keyed by
    /// [`WORKING_DIRECTORY_ENV`] and [`LOG_LEVEL_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when an override is out of range.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(directory) = lookup(WORKING_DIRECTORY_ENV) {
            self.working_directory = Utf8PathBuf::from(directory);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.working_directory.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid(
                "working_directory must not be empty".to_owned(),
            ));
        }
        if self.dependency_archive_extension.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dependency_archive_extension must not be empty".to_owned(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty".to_owned()));
        }
        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid(format!(
                "invalid log filter '{}': {err}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Returns `<system temp dir>/apiminer`, or a relative `apiminer` directory
/// when the temp dir is not valid UTF-8.
#[must_use]
pub fn default_working_directory() -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(std::env::temp_dir())
        .map(|temp| temp.join("apiminer"))
        .unwrap_or_else(|_| Utf8PathBuf::from("apiminer"))
}
