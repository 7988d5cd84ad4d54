//! Selector configuration.
//!
//! Everything the component needs from its surroundings arrives through
//! [`SelectorConfig`], constructed by the host and optionally persisted as
//! JSON. There is no process-wide state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colour::Colour;
use crate::theme::ThemeKind;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Errors raised while loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported config version {found} (expected {CONFIG_VERSION})")]
    Version { found: u32 },
}

/// Host-supplied configuration for a colour selector instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Version of the configuration file format.
    pub version: u32,

    /// Palette used for the selector chrome.
    #[serde(default)]
    pub theme: ThemeKind,

    /// Colour shown when the selector opens without an explicit one.
    #[serde(default = "default_initial_colour")]
    pub initial_colour: Colour,

    /// Whether the confirmed colour should be written back into
    /// `last_colour` for the next session.
    #[serde(default)]
    pub remember_last: bool,

    /// The most recently confirmed colour, if remembered.
    #[serde(default)]
    pub last_colour: Option<Colour>,
}

fn default_initial_colour() -> Colour {
    Colour::WHITE
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            theme: ThemeKind::default(),
            initial_colour: default_initial_colour(),
            remember_last: false,
            last_colour: None,
        }
    }
}

impl SelectorConfig {
    /// The colour the selector should open with.
    pub fn opening_colour(&self) -> Colour {
        if self.remember_last {
            self.last_colour.unwrap_or(self.initial_colour)
        } else {
            self.initial_colour
        }
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: SelectorConfig = serde_json::from_str(&contents)?;
        if config.version != CONFIG_VERSION {
            return Err(ConfigError::Version {
                found: config.version,
            });
        }
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }
}
