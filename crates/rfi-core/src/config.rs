use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Transfer parameters for the HTTP object-store backend (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Base URL objects are fetched from, as `{endpoint}/{container}/{key}`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            connect_timeout_secs: 15,
            timeout_secs: 300,
        }
    }
}

/// Global configuration loaded from `~/.config/rfi/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfiConfig {
    /// Prefix prepended when composing the local staging path for a
    /// downloaded plan artifact (may be empty; may end in a separator).
    #[serde(default)]
    pub staging_prefix: String,
    /// Optional transfer parameters; if missing, built-in defaults are used.
    #[serde(default)]
    pub transfer: Option<TransferConfig>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rfi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RfiConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RfiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RfiConfig = toml::from_str(&data)?;
    Ok(cfg)
}
