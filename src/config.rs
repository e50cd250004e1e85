use crate::display::{self, DEFAULT_DATE_FORMAT};
use crate::duration::{Codec, Minutes, SignPolicy};
use crate::error::Error;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub entry: EntryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CodecConfig {
    /// How a leading sign on duration text is read
    #[serde(default)]
    pub sign_policy: SignPolicy,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EntryConfig {
    /// Minutes added by each quick-add button, in display order
    #[serde(default = "default_quick_add")]
    pub quick_add: Vec<Minutes>,
}

fn default_quick_add() -> Vec<Minutes> {
    vec![15, 30, 60, 120]
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            quick_add: default_quick_add(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl EntryConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.quick_add.contains(&0) {
            return Err(Error::InvalidConfig(
                "quick_add amounts must be non-zero".to_string(),
            ));
        }
        if self.quick_add.iter().any(|m| *m < 0) {
            return Err(Error::InvalidConfig(
                "quick_add amounts must be positive, the sign toggle sets direction".to_string(),
            ));
        }
        Ok(())
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), Error> {
        display::validate_date_format(&self.date_format)
    }
}

impl Config {
    pub fn codec(&self) -> Codec {
        Codec::new(self.codec.sign_policy)
    }

    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.entry.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".horas");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load `~/.horas/config.toml`, falling back to defaults when it is absent.
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_from_path(&path).with_context(|| format!("Failed to load {}", path.display()))
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
