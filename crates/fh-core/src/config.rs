use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CHECKSUM_TOOL: &str = "sha256sum";
const DEFAULT_VERIFY_TIMEOUT_SECS: u64 = 10;

/// Global configuration loaded from `~/.config/fh/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FhConfig {
    /// Directory where generated files are written.
    pub data_dir: PathBuf,
    /// External checksum program used for cross-checks; if missing, `sha256sum` is used.
    #[serde(default)]
    pub checksum_tool: Option<String>,
    /// Timeout in seconds for the external checksum tool (None = built-in default).
    #[serde(default)]
    pub verify_timeout_secs: Option<u64>,
}

impl Default for FhConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            checksum_tool: None,
            verify_timeout_secs: None,
        }
    }
}

impl FhConfig {
    /// External checksum program to invoke.
    pub fn checksum_tool(&self) -> &str {
        self.checksum_tool.as_deref().unwrap_or(DEFAULT_CHECKSUM_TOOL)
    }

    /// Deadline for one external tool invocation.
    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs.unwrap_or(DEFAULT_VERIFY_TIMEOUT_SECS))
    }
}

/// Default data directory: XDG data home for `fh` (e.g. `~/.local/share/fh`).
fn default_data_dir() -> PathBuf {
    xdg::BaseDirectories::with_prefix("fh")
        .map(|dirs| dirs.get_data_home())
        .unwrap_or_else(|_| PathBuf::from("fh-data"))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fh")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FhConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FhConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FhConfig = toml::from_str(&data)?;
    Ok(cfg)
}
