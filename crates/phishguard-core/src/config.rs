use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `model_path` from the config file.
pub const MODEL_ENV_VAR: &str = "PHISHGUARD_MODEL";

/// Page fetch parameters (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer, redirects included.
    pub timeout_secs: u64,
    /// Body bytes kept; anything beyond is discarded and the page marked truncated.
    pub max_body_bytes: usize,
    /// Maximum redirects followed.
    pub max_redirects: u32,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 20,
            max_body_bytes: 2 * 1024 * 1024,
            max_redirects: 5,
            user_agent: format!("phishguard/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Classifier model file (JSON linear model). Required only for `classify`.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Optional fetch settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl PhishguardConfig {
    pub fn fetch_or_default(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }

    /// Picks the model path: explicit argument, then `env_value`, then the
    /// config file.
    pub fn resolve_model_path(
        &self,
        explicit: Option<&Path>,
        env_value: Option<PathBuf>,
    ) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or(env_value)
            .or_else(|| self.model_path.clone())
    }
}

/// Reads [`MODEL_ENV_VAR`], ignoring an empty value.
pub fn model_path_from_env() -> Option<PathBuf> {
    std::env::var_os(MODEL_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PhishguardConfig> {
    if !path.exists() {
        let default_cfg = PhishguardConfig {
            model_path: None,
            fetch: Some(FetchConfig::default()),
        };
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PhishguardConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
