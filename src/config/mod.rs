use std::time::Duration;

use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config, read_config_from};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

pub const DEFAULT_BINDTO: &str = "0.0.0.0:8080";
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    host: Host,
    #[serde(default)]
    app: App,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    #[serde(default = "default_bindto")]
    bindto: String,
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_true")]
    playground: bool,
    #[serde(default = "default_shutdown_grace_secs")]
    shutdown_grace_secs: u64,
}

fn default_bindto() -> String {
    String::from(DEFAULT_BINDTO)
}

fn default_true() -> bool {
    true
}

fn default_shutdown_grace_secs() -> u64 {
    DEFAULT_SHUTDOWN_GRACE_SECS
}

impl Default for Host {
    fn default() -> Self {
        Self {
            bindto: default_bindto(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            playground: true,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl Config {
    pub fn from_toml(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = toml::from_slice(bytes)?;
        Ok(config)
    }

    /// Loads the config once per process. A missing file means compiled-in defaults, a broken
    /// one stops the process.
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let read_cfg = |use_local| -> ConfigResult<Self> {
                    let bytes = read_config(use_local)?;
                    Self::from_toml(&bytes)
                };

                match read_cfg(use_local) {
                    Ok(c) => c,
                    Err(ConfigError::ConfigNotFound) => {
                        tracing::info!("config not found, using defaults.");
                        Self::default()
                    }
                    Err(e) => {
                        crate::error::log_error(&e);
                        tracing::error!("Config is invalid.");
                        std::process::exit(1);
                    }
                }
            })
            .await
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn playground(&self) -> bool {
        self.playground
    }

    #[inline]
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
