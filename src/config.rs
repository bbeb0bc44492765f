use crate::case::{CaseStyle, TokenizerOptions};
use crate::cli::output::OutputFormat;
use crate::error::CaseError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub style: CaseStyle,
    pub unicode: bool,
    pub split_case_boundaries: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: CaseStyle::Camel,
            unicode: true,
            split_case_boundaries: false,
            format: OutputFormat::Text,
        }
    }
}

/// One source of settings: a config file or the command line.
/// Only the keys that are present override lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub style: Option<CaseStyle>,
    pub unicode: Option<bool>,
    pub split_case_boundaries: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub settings: ConfigLayer,
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(Self::global_config_path(), overrides)
    }

    fn load_from(global_path: Option<PathBuf>, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                log::debug!("loading global config {}", global_path.display());
                config.apply(Self::read_layer(&global_path)?);
            }
        }

        // An explicit --config replaces the local lookup
        let local_path = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
        if overrides.config_file.is_some() || local_path.exists() {
            log::debug!("loading local config {}", local_path.display());
            config.apply(Self::read_layer(&local_path)?);
        }

        config.apply(overrides.settings);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.apply(Self::read_layer(path)?);
        Ok(config)
    }

    fn read_layer(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let layer = toml::from_str(&contents)
            .map_err(|e| CaseError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(layer)
    }

    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(unicode) = layer.unicode {
            self.unicode = unicode;
        }
        if let Some(split) = layer.split_case_boundaries {
            self.split_case_boundaries = split;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            unicode: self.unicode,
            split_case_boundaries: self.split_case_boundaries,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
