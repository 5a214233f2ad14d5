use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOG_PATH: &str = "./requests.log";

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_base: String,
    pub timeout: Duration
}

// keep the key out of logs
impl fmt::Debug for ProviderConfig {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {

        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()

    }

}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub bind_addr: SocketAddr,
    pub log_path: PathBuf
}

impl Config {

    pub fn from_env() -> Result<Self, ConfigError> {

        Self::from_lookup(|key| std::env::var(key).ok())

    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {

        let api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("GROQ_API_KEY"))?;

        let api_base = lookup("GROQ_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("GROQ_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>()
                .map_err(|_| ConfigError::Invalid { var: "GROQ_TIMEOUT_SECS", value: raw })?,
            None => DEFAULT_TIMEOUT_SECS
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: bind_raw.clone() })?;

        let log_path = lookup("LOG_PATH")
            .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string())
            .into();

        Ok(Config {
            provider: ProviderConfig {
                api_key,
                api_base,
                timeout: Duration::from_secs(timeout_secs)
            },
            bind_addr,
            log_path
        })

    }

}
