//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_API_URL` - Storefront GraphQL endpoint URL
//!   (e.g., `https://your-store.myshopify.com/api/2024-01/graphql.json`)
//! - `STOREFRONT_ACCESS_TOKEN` - Storefront API access token
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Storefront API connection configuration
    pub api: StorefrontApiConfig,
}

/// Storefront GraphQL API connection configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct StorefrontApiConfig {
    /// GraphQL endpoint URL
    pub api_url: String,
    /// Storefront API access token (server-side only)
    pub access_token: SecretString,
}

impl std::fmt::Debug for StorefrontApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontApiConfig")
            .field("api_url", &self.api_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let api = StorefrontApiConfig::from_env()?;

        Ok(Self { host, port, api })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl StorefrontApiConfig {
    /// Load the API connection configuration alone from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            api_url: get_required_env("STOREFRONT_API_URL")?,
            access_token: SecretString::from(get_required_env("STOREFRONT_ACCESS_TOKEN")?),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            api: StorefrontApiConfig {
                api_url: "https://test.myshopify.com/api/2024-01/graphql.json".to_string(),
                access_token: SecretString::from("token"),
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_api_config_debug_redacts_token() {
        let config = StorefrontApiConfig {
            api_url: "https://test.myshopify.com/api/2024-01/graphql.json".to_string(),
            access_token: SecretString::from("super_secret_access_token"),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_access_token"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("STOREFRONT_API_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: STOREFRONT_API_URL"
        );
    }
}
