//! TOML settings for the fuego-mark editor.
//!
//! Settings are layered: built-in defaults, then `~/.config/fuego-mark/config.toml`
//! when present, then a store directory given on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/fuego-mark";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_STORE_DIR: &str = "~/.local/share/fuego-mark";
const DEFAULT_DOCUMENT_KEY: &str = "fuego-mark-doc";
const DEFAULT_STATUS_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Editor settings. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the document store writes into. `~` and `$VAR` are expanded.
    pub store_path: PathBuf,
    /// Key the document is persisted under.
    pub document_key: String,
    /// How long the status line shows "Saving..." after an edit.
    pub status_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: expand(Path::new(DEFAULT_STORE_DIR)),
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
            status_debounce_ms: DEFAULT_STATUS_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Location of the settings file.
    pub fn config_path() -> PathBuf {
        expand(Path::new(CONFIG_DIR)).join(CONFIG_FILE)
    }

    /// Parses settings text. `origin` is only used in error messages.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.store_path = expand(&config.store_path);
        config.validate()?;
        Ok(config)
    }

    /// Reads settings from `path`; `Ok(None)` when there is no such file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml(&text, path).map(Some)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Defaults, overlaid with the settings file at `path` if any, overlaid
    /// with a store directory from the command line if given.
    pub fn resolve(
        path: impl AsRef<Path>,
        store_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load_from_path(path)?.unwrap_or_default();
        if let Some(store_path) = store_override {
            config.store_path = expand(&store_path);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.document_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "document_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "store_path",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the settings to `path`, creating parent directories.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn status_debounce(&self) -> Duration {
        Duration::from_millis(self.status_debounce_ms)
    }
}

/// Expands `~` and environment variables; unknown variables leave the path
/// unchanged.
fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
