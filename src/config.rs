//! Configuration management

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// BFF gateway configuration.
///
/// Set once at startup and shared read-only across all request handlers for
/// the lifetime of the process; never mutated per request, so no
/// synchronization is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BffConfig {
    /// Fail requests whose pipeline never ran the BFF marker middleware.
    ///
    /// Catches a miswired gateway (marker middleware missing or mounted in
    /// the wrong place) during development instead of silently skipping the
    /// security checks that depend on it.
    pub enforce_bff_middleware: bool,

    /// Name of the anti-forgery header the frontend must send on proxied calls
    pub anti_forgery_header_name: String,

    /// Exact value the anti-forgery header must carry
    pub anti_forgery_header_value: String,

    /// Path a top-level navigation is redirected to when it needs to log in
    pub login_path: String,
}

impl Default for BffConfig {
    fn default() -> Self {
        Self {
            enforce_bff_middleware: true,
            anti_forgery_header_name: "X-CSRF".to_string(),
            anti_forgery_header_value: "1".to_string(),
            login_path: "/bff/login".to_string(),
        }
    }
}

impl BffConfig {
    /// Load configuration from an optional YAML file plus environment variables.
    ///
    /// Environment variables use the `BFF_` prefix (e.g. `BFF_LOGIN_PATH`)
    /// and override file values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or the
    /// resulting configuration fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            figment = figment.merge(Yaml::file(p));
        }

        figment = figment.merge(Env::prefixed("BFF_").split("__"));

        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the anti-forgery header name is not a legal HTTP
    /// header name, the expected value is empty, or the login path is not
    /// absolute.
    pub fn validate(&self) -> Result<()> {
        if axum::http::HeaderName::from_bytes(self.anti_forgery_header_name.as_bytes()).is_err() {
            return Err(Error::Config(format!(
                "anti_forgery_header_name is not a valid HTTP header name: {:?}",
                self.anti_forgery_header_name
            )));
        }

        if self.anti_forgery_header_value.is_empty() {
            return Err(Error::config(
                "anti_forgery_header_value must not be empty",
            ));
        }

        if !self.login_path.starts_with('/') {
            return Err(Error::Config(format!(
                "login_path must start with '/': {:?}",
                self.login_path
            )));
        }

        Ok(())
    }
}
