use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::Separator;

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Query separator used when printing URLs: "header" (`&`) or "markup" (`&amp;`).
    #[serde(default = "default_output")]
    pub output: Separator,
    /// Print parsed components as JSON instead of aligned text.
    #[serde(default)]
    pub json: bool,
}

fn default_output() -> Separator {
    Separator::Header
}

impl Default for UrlkitConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            json: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlkitConfig> {
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
