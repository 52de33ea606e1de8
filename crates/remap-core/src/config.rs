use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters for the liveness probe (optional `[probe.retry]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per URL (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: Duration::from_secs_f64(self.base_delay_secs.max(0.0)),
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Liveness probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every probe.
    pub user_agent: String,
    /// Also flag URLs whose probe failed at the transport level (DNS, connect, timeout).
    /// When false, only confirmed 404s end up in the error documents.
    #[serde(default)]
    pub flag_transport_errors: bool,
    /// Optional retry policy; if missing, every URL gets exactly one attempt.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: "Mozilla/5.0".to_string(),
            flag_transport_errors: false,
            retry: None,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_else(RetryPolicy::single_attempt)
    }
}

/// File names of the artifacts each stage reads and writes, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactNames {
    pub inventory: String,
    pub aligned: String,
    pub mapping: String,
    pub errors_json: String,
    pub errors_csv: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            inventory: "1_listado_nuevas.json".to_string(),
            aligned: "2_pares_alineados.csv".to_string(),
            mapping: "3_mapeo_final.py.txt".to_string(),
            errors_json: "4_errores_404.json".to_string(),
            errors_csv: "4_errores_404.csv".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/remap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Prefix every generated URL starts with (upload directory of the new site).
    pub new_url_prefix: String,
    /// Suffix inserted before the extension of every generated file name (usually empty).
    #[serde(default)]
    pub new_url_suffix: String,
    /// Suffix inserted before the extension when repairing a broken URL.
    pub repair_suffix: String,
    /// Extensions (without dot, case-insensitive) of local files that belong in the inventory.
    pub extensions: Vec<String>,
    #[serde(default)]
    pub artifacts: ArtifactNames,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            new_url_prefix: "https://firmavirtual.legal/wp-content/uploads/2025/12/".to_string(),
            new_url_suffix: String::new(),
            repair_suffix: "-1".to_string(),
            extensions: ["webp", "jpg", "jpeg", "png", "pdf", "webm"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            artifacts: ArtifactNames::default(),
            probe: ProbeConfig::default(),
        }
    }
}

impl MigrationConfig {
    /// True if `file_name` ends in one of the configured extensions.
    pub fn accepts_file(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("remap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MigrationConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MigrationConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MigrationConfig = toml::from_str(&data)?;
    Ok(cfg)
}
