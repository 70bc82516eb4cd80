//! TOML configuration for a password field.
//!
//! Every key is optional; missing keys take the built-in defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::animation::{DEFAULT_DURATION, DEFAULT_SLIDE_OFFSET, LabelAnimations};
use crate::evaluator::ValidatorMode;
use crate::field::{FieldDimensions, PasswordField, ToggleIcons};
use crate::table::{Color, ColorError, DEFAULT_COLORS, DEFAULT_MESSAGES, StrengthTable, TableError};

pub const DEFAULT_CONFIG_PATH: &str = "config/pwd-field.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Built-in validator selection. Custom validators are installed in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    #[default]
    None,
    Default,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub validator: ValidatorKind,
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default)]
    pub dimensions: FieldDimensions,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_messages() -> Vec<String> {
    DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
}
fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            validator: ValidatorKind::default(),
            messages: default_messages(),
            colors: default_colors(),
            icons: IconConfig::default(),
            dimensions: FieldDimensions::default(),
            animation: AnimationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_show_icon")]
    pub show: String,
    #[serde(default = "default_hide_icon")]
    pub hide: String,
}

fn default_show_icon() -> String {
    ToggleIcons::default().show
}
fn default_hide_icon() -> String {
    ToggleIcons::default().hide
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            show: default_show_icon(),
            hide: default_hide_icon(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_slide_offset")]
    pub slide_offset: f32,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION.as_millis() as u64
}
fn default_slide_offset() -> f32 {
    DEFAULT_SLIDE_OFFSET
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            slide_offset: default_slide_offset(),
        }
    }
}

impl FieldConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config with fallback chain: explicit path, then
    /// [`DEFAULT_CONFIG_PATH`], then built-in defaults.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Self {
        if let Some(path) = explicit_path {
            match Self::load(path) {
                Ok(cfg) => return cfg,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Failed to load config from {}: {_e}", path.display());
                }
            }
        }

        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            match Self::load(default_path) {
                Ok(cfg) => return cfg,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Failed to load default config: {_e}");
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Using built-in password field configuration");
        Self::default()
    }

    pub fn table(&self) -> Result<StrengthTable, ConfigError> {
        let colors = self
            .colors
            .iter()
            .map(|c| c.parse::<Color>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StrengthTable::new(self.messages.clone(), colors)?)
    }

    pub fn animations(&self) -> LabelAnimations {
        LabelAnimations {
            duration: Duration::from_millis(self.animation.duration_ms),
            slide_offset: self.animation.slide_offset,
        }
    }

    pub fn validator_mode(&self) -> ValidatorMode {
        match self.validator {
            ValidatorKind::None => ValidatorMode::None,
            ValidatorKind::Default => ValidatorMode::Default,
        }
    }

    /// Builds a field from this config.
    pub fn build(&self) -> Result<PasswordField, ConfigError> {
        Ok(PasswordField::new(self.table()?)
            .with_validator(self.validator_mode())
            .with_icons(ToggleIcons {
                show: self.icons.show.clone(),
                hide: self.icons.hide.clone(),
            })
            .with_dimensions(self.dimensions.clone())
            .with_animations(self.animations()))
    }
}
