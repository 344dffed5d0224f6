use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
#[cfg(feature = "cli")]
pub mod interfaces;

use application::services::{AdminGateway, CredentialProvider, Notifier, SiteApi};
use config::{ClientConfig, ENV_DATA_DIR};
use infrastructure::{
    ConsoleNotifier, RemoteAdminGateway, RemoteSiteApi, SledCredentialStore, StaticCredentials,
};

/// Wired adapters shared by every front-end command.
pub struct AppHandles {
    pub config: ClientConfig,
    pub site: Arc<dyn SiteApi>,
    pub admin: Arc<dyn AdminGateway>,
    pub token_store: Arc<SledCredentialStore>,
    pub notifier: Arc<dyn Notifier>,
}

/// Entry point invoked from `main.rs`.
#[cfg(feature = "cli")]
pub fn run() {
    if let Err(err) = interfaces::cli::run() {
        eprintln!("[hdmonks] {err:#}");
        std::process::exit(1);
    }
}

/// Resolve the data directory and load `config.json` plus environment overrides.
pub fn load_config() -> Result<ClientConfig> {
    let data_dir = resolve_data_dir()?;
    Ok(ClientConfig::load_from(&data_dir, |key| {
        std::env::var(key).ok()
    }))
}

/// Build the HTTP adapters and the credential store for `config`.
///
/// `token_override` replaces the stored admin token for this process only.
pub fn build_environment(
    config: ClientConfig,
    token_override: Option<String>,
) -> Result<AppHandles> {
    build_environment_with(config, token_override, Arc::new(ConsoleNotifier))
}

pub fn build_environment_with(
    config: ClientConfig,
    token_override: Option<String>,
    notifier: Arc<dyn Notifier>,
) -> Result<AppHandles> {
    let store_path = config.data_dir.join("credentials");
    let token_store = Arc::new(
        SledCredentialStore::open(&store_path)
            .map_err(|err| anyhow!(err.to_string()))
            .context("failed to open credential store")?,
    );

    let credentials: Arc<dyn CredentialProvider> = match token_override {
        Some(token) => Arc::new(StaticCredentials::new(token)),
        None => Arc::clone(&token_store) as Arc<dyn CredentialProvider>,
    };

    let site: Arc<dyn SiteApi> = Arc::new(RemoteSiteApi::new(config.api_base()));
    let admin: Arc<dyn AdminGateway> =
        Arc::new(RemoteAdminGateway::new(config.api_base(), credentials));

    Ok(AppHandles {
        config,
        site,
        admin,
        token_store,
        notifier,
    })
}

#[cfg(feature = "cli")]
fn init_tracing(filter: &str) {
    static INIT: std::sync::OnceLock<()> = std::sync::OnceLock::new();

    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();
    });
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_DATA_DIR) {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir).context("failed to create data directory")?;
        return Ok(dir);
    }

    let dirs = directories::ProjectDirs::from("com", "hdmonks", "hdmonks")
        .ok_or_else(|| anyhow!("unable to determine OS data dir"))?;
    let dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir).context("failed to create data directory")?;
    Ok(dir)
}
