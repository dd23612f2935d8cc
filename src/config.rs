//! Run configuration for emojicon
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Config file (--config, or ~/.config/emojicon/config.toml)
//! 3. Environment variables (EMOJICON_*)
//! 4. Built-in defaults (lowest priority)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmojiconError, EmojiconResult};

/// Partial run configuration. `None` means "not set at this layer";
/// layers combine with [`RunConfig::merged_over`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Raster size in pixels; 0 or unset keeps the vector source.
    pub size: Option<u32>,

    /// Emoji glyph or shortcode to fetch.
    pub emoji: Option<String>,

    /// Destination path; unset derives icon.svg / icon<SIZE>.png.
    pub output: Option<PathBuf>,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmojiconResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmojiconResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_keys: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |key| {
            unknown_keys.push(key.to_string());
        })
        .map_err(|e| EmojiconError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_keys
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Read the EMOJICON_* environment variable layer.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(size) = env::var("EMOJICON_SIZE") {
            match size.parse() {
                Ok(parsed) => config.size = Some(parsed),
                Err(_) => log::warn!("ignoring non-numeric EMOJICON_SIZE {size:?}"),
            }
        }
        if let Ok(emoji) = env::var("EMOJICON_EMOJI") {
            config.emoji = Some(emoji);
        }
        if let Ok(output) = env::var("EMOJICON_OUTPUT") {
            config.output = Some(PathBuf::from(output));
        }

        config
    }

    /// Combine two layers: values set on `self` win over `fallback`.
    pub fn merged_over(self, fallback: Self) -> Self {
        Self {
            size: self.size.or(fallback.size),
            emoji: self.emoji.or(fallback.emoji),
            output: self.output.or(fallback.output),
        }
    }

    /// Default user config file location (~/.config/emojicon/config.toml).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("emojicon").join("config.toml"))
    }
}
