use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// When unset the profile record only lives in memory.
    pub profile_store_path: Option<PathBuf>,
    pub min_password_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            profile_store_path: None,
            min_password_len: 8,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = std::env::var("APP_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("APP_PORT must be a port number: {e}"))?,
            Err(_) => defaults.port,
        };
        let profile_store_path = std::env::var("PROFILE_STORE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let min_password_len = std::env::var("MIN_PASSWORD_LEN")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.min_password_len);
        Ok(Self {
            host,
            port,
            profile_store_path,
            min_password_len,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
