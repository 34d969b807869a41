use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/linkscan/config.toml`.
/// CLI flags take precedence over these values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkscanConfig {
    /// Path to the classifier artifact. When unset, the artifact under the
    /// XDG data dir is used.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Path of the serving socket. When unset, the socket lives in the XDG
    /// state dir.
    #[serde(default)]
    pub socket_path: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkscanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkscanConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Default path for the serving socket (XDG state dir).
pub fn default_socket_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("linkscan")?;
    Ok(dirs.get_state_home().join("linkscan.sock"))
}

/// Default path for the classifier artifact (XDG data dir).
pub fn default_model_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("linkscan")?;
    Ok(dirs.get_data_home().join("model.json"))
}
