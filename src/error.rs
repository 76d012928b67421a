//! Error types for the BFF gateway core

use thiserror::Error;

/// Result type alias for the BFF gateway core
pub type Result<T> = std::result::Result<T, Error>;

/// BFF gateway errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration or pipeline wiring error.
    ///
    /// Fatal at request scope: it means the gateway was set up incorrectly,
    /// not that the request was bad. Expected to surface in development and
    /// integration testing, not in production traffic.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token acquisition failed inside the token-management collaborator.
    ///
    /// Distinct from "no token available" (which is not an error); this is a
    /// failure raised by the collaborator itself and is propagated unchanged.
    #[error("Token acquisition failed: {0}")]
    Acquisition(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a token acquisition error
    pub fn acquisition(message: impl Into<String>) -> Self {
        Self::Acquisition(message.into())
    }
}
