use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::scoring::{ScoringConfig, CONTAMINANTS};

/// Write a starter config populated with the reference weights, so a
/// deployment can tweak them in place.
///
/// If `path` is Some, writes there; otherwise uses the default config path.
/// Refuses to overwrite an existing file.
pub fn write_starter_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() {
        anyhow::bail!(
            "Config already exists at {}. Edit it directly or remove it first.",
            config_path.display()
        );
    }

    let weights = CONTAMINANTS
        .iter()
        .map(|contaminant| (contaminant.id.to_string(), contaminant.weight))
        .collect();
    let config = Config {
        location: None,
        scoring: Some(ScoringConfig { weights: Some(weights) }),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
