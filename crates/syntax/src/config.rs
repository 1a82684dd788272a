// Chunk: docs/chunks/highlight_config - Highlighter configuration file

//! Highlighter configuration.
//!
//! The configuration lives in a JSON file in the platform config directory:
//! - macOS: `~/Library/Application Support/hilite/highlight.json`
//! - Linux: `~/.config/hilite/highlight.json`
//!
//! Every field is optional; missing fields take their defaults.
//!
//! ```json
//! { "max_word_len": 254, "theme": "catppuccin-mocha" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::{Classifier, DEFAULT_MAX_WORD_LEN};
use crate::error::ConfigError;
use crate::theme::SyntaxTheme;

/// Config directory name under the platform config dir.
const APP_DIR: &str = "hilite";

/// Config file name.
const CONFIG_FILE: &str = "highlight.json";

/// The built-in themes a config can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Classic,
    CatppuccinMocha,
}

/// Highlighter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Longest lowercase run looked up as a type or keyword.
    pub max_word_len: usize,
    pub theme: ThemeName,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            theme: ThemeName::default(),
        }
    }
}

impl HighlightConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HighlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Writes the config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads the config from [`config_file_path`], falling back to the
    /// defaults when the file is missing or unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load highlight config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_word_len == 0 {
            return Err(ConfigError::InvalidWordLimit(self.max_word_len));
        }
        Ok(())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.max_word_len)
    }

    pub fn theme(&self) -> SyntaxTheme {
        match self.theme {
            ThemeName::Classic => SyntaxTheme::classic(),
            ThemeName::CatppuccinMocha => SyntaxTheme::catppuccin_mocha(),
        }
    }
}

/// Returns the path to the config file.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_DIR).join(CONFIG_FILE))
}
