use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default filename used to persist configuration within the data directory.
const CONFIG_FILENAME: &str = "config.json";

pub const ENV_API_BASE_URL: &str = "HDMONKS_API_BASE_URL";
pub const ENV_DATA_DIR: &str = "HDMONKS_DATA_DIR";
pub const ENV_LOG: &str = "HDMONKS_LOG";

/// Client configuration: `config.json` in the data directory, overridden
/// field by field from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the REST backend, without the `/api` suffix.
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(skip)]
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            log_filter: default_log_filter(),
            data_dir: PathBuf::new(),
        }
    }
}

impl ClientConfig {
    /// Read `<data_dir>/config.json` (missing or unreadable file means
    /// defaults), then apply overrides from `env`.
    pub fn load_from(
        data_dir: impl AsRef<Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        let path = data_dir.join(CONFIG_FILENAME);

        let mut config = if path.exists() {
            fs::read(&path)
                .ok()
                .and_then(|bytes| serde_json::from_slice::<ClientConfig>(&bytes).ok())
                .unwrap_or_default()
        } else {
            ClientConfig::default()
        };
        config.data_dir = data_dir;

        if let Some(base) = env(ENV_API_BASE_URL) {
            config.api_base_url = Some(base);
        }
        if let Some(filter) = env(ENV_LOG) {
            config.log_filter = filter;
        }

        config.api_base_url = config
            .api_base_url
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty());
        config
    }

    /// Base URL requests are built from. Empty when unconfigured, in which
    /// case every request fails at request time.
    pub fn api_base(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or("")
    }

    /// Log a warning when no API base is configured. Never fails.
    pub fn warn_if_unconfigured(&self) -> bool {
        if self.api_base_url.is_none() {
            warn!(
                target: "hdmonks::config",
                "{} is not defined; requests will fail",
                ENV_API_BASE_URL
            );
            return false;
        }
        true
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILENAME)
    }

    /// Ensure the data directory exists and write the JSON payload.
    pub fn persist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let payload = serde_json::to_vec_pretty(self)?;
        fs::write(self.config_path(), payload)
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
