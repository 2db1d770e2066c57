use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub campus_data_path: PathBuf,
    /// Exact origin allowed to make cross-origin requests; `None` allows any origin
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "4567".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let campus_data_path = lookup("CAMPUS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/campus.json"));

        let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN") {
            None => None,
            Some(origin) if origin == "*" => None,
            Some(origin) => Some(
                HeaderValue::from_str(&origin)
                    .context("CORS_ALLOW_ORIGIN must be a valid header value")?,
            ),
        };

        Ok(Config {
            service_host,
            service_port,
            campus_data_path,
            cors_allow_origin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Campus data: {}", self.campus_data_path.display());
        tracing::info!(
            "  CORS allowed origin: {}",
            self.cors_allow_origin
                .as_ref()
                .and_then(|origin| origin.to_str().ok())
                .unwrap_or("any")
        );
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
