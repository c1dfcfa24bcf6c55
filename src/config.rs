//! Rainbow configuration persistence
//!
//! Stores user preferences in `~/.config/rainbow-braces/config.yaml`:
//!
//! ```yaml
//! enabled: true
//! max_depth: 4
//! languages:
//!   rust: { braces: "(){}[]<>" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::language::{LanguageId, LanguageProfile, LanguageRegistry};
use crate::settings::{RainbowSettings, DEFAULT_MAX_DEPTH};

/// Bracket list override for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOverride {
    /// Concatenated open/close pairs, e.g. `"(){}[]<>"`
    pub braces: String,
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainbowConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Number of distinct depth classes
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Keyed by content type name (`rust`, `csharp`, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, LanguageOverride>,
}

fn default_enabled() -> bool {
    true
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_depth: default_max_depth(),
            languages: BTreeMap::new(),
        }
    }
}

impl RainbowConfig {
    /// Load config from disk, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Fail fast on values the tagger cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        self.overrides().map(|_| ())
    }

    pub fn settings(&self) -> RainbowSettings {
        RainbowSettings {
            enabled: self.enabled,
            max_depth: self.max_depth,
        }
    }

    /// Registry of built-in profiles with this config's overrides applied
    pub fn registry(&self) -> Result<LanguageRegistry, ConfigError> {
        Ok(self
            .overrides()?
            .into_iter()
            .fold(LanguageRegistry::new(), LanguageRegistry::with_override))
    }

    fn overrides(&self) -> Result<Vec<LanguageProfile>, ConfigError> {
        self.languages
            .iter()
            .map(|(name, lang)| {
                let language = parse_language(name)?;
                LanguageProfile::new(language, &lang.braces).map_err(|source| {
                    ConfigError::Profile {
                        language: name.clone(),
                        source,
                    }
                })
            })
            .collect()
    }
}

/// Content type names resolve like the host's; anything unknown is an error
/// here rather than a silent plain-text override
fn parse_language(name: &str) -> Result<LanguageId, ConfigError> {
    match LanguageId::from_content_type(name) {
        LanguageId::PlainText => match name.trim().to_lowercase().as_str() {
            "plaintext" | "plain" | "text" => Ok(LanguageId::PlainText),
            _ => Err(ConfigError::UnknownLanguage(name.to_string())),
        },
        language => Ok(language),
    }
}
