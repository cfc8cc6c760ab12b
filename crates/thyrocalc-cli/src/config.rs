use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thyrocalc_core::config::DosingConfig;

/// Built-in configuration used when no config file is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Canonical,
    Conservative,
}

impl Preset {
    pub fn config(self) -> DosingConfig {
        match self {
            Self::Canonical => DosingConfig::canonical().clone(),
            Self::Conservative => DosingConfig::conservative(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("thyrocalc"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Resolve the active configuration: an explicit path must exist; otherwise
/// the per-user file is used when present, falling back to `preset`.
pub fn load_config(explicit: Option<&Path>, preset: Preset) -> eyre::Result<DosingConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match default_config_path() {
        Ok(path) if path.exists() => read_config(&path),
        _ => {
            tracing::debug!(preset = ?preset, "no config file, using preset");
            Ok(preset.config())
        }
    }
}

pub fn read_config(path: &Path) -> eyre::Result<DosingConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = DosingConfig::from_json(&contents)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Write `config` to `path`, refusing to clobber an existing file unless
/// `force` is set.
pub fn save_config(config: &DosingConfig, path: &Path, force: bool) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config.validate()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let json = serde_json::to_string_pretty(config)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
