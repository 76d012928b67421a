//! BFF Gateway Authorization Core
//!
//! The authorization gate of a Backend-For-Frontend (BFF) gateway: per
//! request it decides whether the request may reach a protected proxy path
//! and which credential to attach when forwarding downstream. The browser
//! never holds OAuth tokens; the gateway holds them server-side and injects
//! them only when proxying.
//!
//! # What lives here
//!
//! - **Pipeline invariant**: the BFF marker middleware must have run before
//!   the gate ([`gateway::pipeline`]).
//! - **CSRF guard**: custom-header admission check ([`gateway::csrf`]).
//! - **Token resolution**: user token, client-credentials token, or
//!   user-with-client-fallback ([`tokens`]).
//! - **Ajax classification**: 401 vs login redirect on failure
//!   ([`gateway::classify`]).
//!
//! Token acquisition/refresh and the proxy transport are collaborators
//! behind interfaces ([`tokens::AccessTokenManager`]), not part of this
//! crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod tokens;

pub use config::BffConfig;
pub use context::RequestContext;
pub use error::{Error, Result};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing/logging
pub fn setup_tracing(level: &str, format: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        Some("json") => {
            subscriber.with(fmt::layer().json()).init();
        }
        _ => {
            subscriber.with(fmt::layer()).init();
        }
    }

    Ok(())
}
