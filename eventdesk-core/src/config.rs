//! Global eventdesk configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_DEBOUNCE_MS;
use crate::error::{EventDeskError, EventDeskResult};
use crate::store::FileStore;
use crate::theme::Theme;

static DEFAULT_DATA_DIR: &str = "~/.eventdesk";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Configuration at ~/.config/eventdesk/config.toml
///
/// Every key can be overridden with an `EVENTDESK_`-prefixed environment
/// variable, e.g. `EVENTDESK_DATA_DIR`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EventDeskConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Quiet period before search input is applied.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Stands in for the OS color-scheme preference when no theme is saved.
    #[serde(default)]
    pub system_theme: Theme,
}

impl Default for EventDeskConfig {
    fn default() -> Self {
        EventDeskConfig {
            data_dir: default_data_dir(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            system_theme: Theme::Light,
        }
    }
}

impl EventDeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> EventDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) plus environment overrides.
    pub fn load_from(path: &Path) -> EventDeskResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVENTDESK").try_parsing(true))
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Data directory in display-friendly form, keeping `~`.
    pub fn display_path(&self) -> PathBuf {
        self.data_dir.clone()
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// The file store rooted at the data directory.
    pub fn open_store(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    pub fn system_prefers_dark(&self) -> bool {
        self.system_theme == Theme::Dark
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# Where events, accounts and the theme choice are stored:
# data_dir = \"{}\"

# Milliseconds of quiet before `eventdesk browse` re-runs a search:
# debounce_ms = {}

# Theme to use when none has been chosen, \"light\" or \"dark\":
# system_theme = \"light\"
",
            DEFAULT_DATA_DIR, DEFAULT_DEBOUNCE_MS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeskError::Config(format!("Could not write config file: {e}")))?;

        tracing::info!(path = %path.display(), "wrote default config");
        Ok(())
    }
}
