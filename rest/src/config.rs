use std::time::Duration;

use serde::Deserialize;

use crate::endpoints::API_BASE;

/// Settings for [`ProxyTransport`](crate::transport::ProxyTransport).
#[derive(Deserialize, Debug, Clone)]
pub struct ProxyConfig {
    #[serde(default = "default_scheme")]
    pub proxy_scheme: String,
    /// `host` or `host:port` of the proxy.
    pub proxy_host: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProxyConfig {
    pub fn new(proxy_host: impl Into<String>) -> ProxyConfig {
        ProxyConfig {
            proxy_scheme: default_scheme(),
            proxy_host: proxy_host.into(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Reads `PROXY_SCHEME`, `PROXY_HOST`, `API_BASE` and `TIMEOUT_SECS`.
    pub fn from_envvar() -> Result<ProxyConfig, envy::Error> {
        envy::from_env()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_scheme() -> String {
    "http".to_owned()
}

fn default_api_base() -> String {
    API_BASE.to_owned()
}

fn default_timeout_secs() -> u64 {
    20
}
