use crate::config::{self, Config};
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    // Dot notation: "codec.sign_policy"
    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

/// Set a dotted key and write the file back. Comments in the file are lost.
pub fn set(key: &str, value: &str, config: &Config) -> Result<()> {
    let path = config::config_path()?;
    let updated = set_in(config, key, value)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    config::save_to_path(&updated, &path)?;
    println!("✓ {} = {}", key, value);
    Ok(())
}

/// Apply `key = value` to a copy of `config`.
///
/// The value is read as JSON when possible (`60`, `[15, 30]`), otherwise as
/// a plain string (`per-token`).
pub fn set_in(config: &Config, key: &str, value: &str) -> Result<Config> {
    let mut tree = serde_json::to_value(config).context("Failed to serialize config")?;
    let new_value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    let mut current = &mut tree;
    for part in key.split('.') {
        current = current
            .get_mut(part)
            .context(format!("Key not found: {}", part))?;
    }
    *current = new_value;

    let updated: Config = serde_json::from_value(tree)
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    updated.validate()?;
    Ok(updated)
}
