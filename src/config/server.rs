//! HTTP server settings.
//!
//! Bind address, deployment environment, log filter, per-request timeout,
//! and the CORS allow-list. The host must be a literal IP address;
//! hostnames are not resolved, and validation rejects anything the bind
//! call would.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use super::error::ValidationError;

/// Longest per-request timeout the server accepts, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Lowercase name, for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated CORS origins; unset means permissive CORS
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    /// The address to bind, parsed from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ValidationError::InvalidHost)?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// True in the production environment.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// CORS origins split on commas, trimmed, empty entries dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.socket_addr()?;
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,seo_desk=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
