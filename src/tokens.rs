//! Token resolution for proxied downstream calls
//!
//! Decides which credential the proxy attaches when forwarding a request on
//! the user's behalf: the user's own token, a client-credentials token for
//! the application itself, or the user token with a client-credentials
//! fallback. Acquisition and refresh live in the token-management
//! collaborator behind [`AccessTokenManager`]; this module only picks which
//! acquisition call to make and applies the fallback policy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::context::RequestContext;

/// Which kind of downstream credential a proxy route wants.
///
/// Chosen per route by the embedding proxy configuration, not by this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// The current user's token only; no fallback
    User,
    /// A client-credentials token representing the application itself
    Client,
    /// The user's token, falling back to client credentials when the user
    /// has none
    UserOrClient,
}

/// Optional per-request parameters forwarded verbatim to user-token
/// acquisition.
///
/// The gate never interprets these; they exist so a route can steer the
/// collaborator (scheme overrides, forced renewal, resource indicators).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTokenParameters {
    /// Overrides the sign-in scheme used to locate the user's session
    pub signin_scheme: Option<String>,
    /// Overrides the challenge scheme used for token acquisition
    pub challenge_scheme: Option<String>,
    /// Force a refresh even if the cached token is still valid
    pub force_renewal: bool,
    /// RFC 8707 resource indicator for the requested token
    pub resource: Option<String>,
}

/// Raw yield of a token acquisition call.
///
/// `access_token` may be `None` or an empty string; collaborators report
/// "no token" both ways and [`ResolvedToken::from_raw`] normalizes them.
#[derive(Debug, Clone, Default)]
pub struct TokenResult {
    /// The acquired access token, if any
    pub access_token: Option<String>,
}

/// The credential the proxy should attach, or the explicit absence of one.
///
/// A separate variant for "no usable credential" keeps the fallback policy
/// total instead of scattering string-emptiness checks; callers must not
/// forward a request with [`ResolvedToken::Absent`] as if it were valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedToken {
    /// A non-empty bearer token
    Bearer(String),
    /// No usable credential
    Absent,
}

impl ResolvedToken {
    /// Normalize a raw acquisition yield: a missing or empty token is absent.
    #[must_use]
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(token) if !token.is_empty() => Self::Bearer(token),
            _ => Self::Absent,
        }
    }

    /// Whether no usable credential was resolved
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The token value, if one was resolved
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bearer(token) => Some(token),
            Self::Absent => None,
        }
    }

    /// Consume self and return the token value, if any
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Bearer(token) => Some(token),
            Self::Absent => None,
        }
    }
}

/// Token-management collaborator plugged in by the embedding gateway.
///
/// Implementations own acquisition, caching and refresh. Both calls may
/// suspend on network I/O. An `Err` means acquisition itself failed and is
/// propagated unchanged by [`resolve_token`]; "no token for this request"
/// is reported as `Ok` with an empty [`TokenResult`].
#[async_trait]
pub trait AccessTokenManager: Send + Sync {
    /// Acquire a token bound to the current user's session
    async fn user_token(
        &self,
        ctx: &RequestContext,
        params: Option<&UserTokenParameters>,
    ) -> Result<TokenResult>;

    /// Acquire a client-credentials token for the application itself
    async fn client_token(&self, ctx: &RequestContext) -> Result<TokenResult>;
}

/// Resolve the credential to attach for a proxied downstream call.
///
/// Policy per [`TokenType`]:
/// - `User`: user acquisition with `params`; whatever it yields, no fallback.
/// - `Client`: client acquisition; `params` is ignored (client-credential
///   flows carry no per-user parameters).
/// - `UserOrClient`: user acquisition first; only an absent or empty yield
///   triggers the client fallback.
///
/// # Errors
///
/// Acquisition errors from the collaborator propagate unchanged. For
/// `UserOrClient` an error on the user side aborts resolution rather than
/// triggering the fallback: only "no token" falls back, not arbitrary
/// acquisition failures.
pub async fn resolve_token(
    manager: &dyn AccessTokenManager,
    token_type: TokenType,
    ctx: &RequestContext,
    params: Option<&UserTokenParameters>,
) -> Result<ResolvedToken> {
    match token_type {
        TokenType::User => {
            let raw = manager.user_token(ctx, params).await?;
            Ok(ResolvedToken::from_raw(raw.access_token))
        }
        TokenType::Client => {
            let raw = manager.client_token(ctx).await?;
            Ok(ResolvedToken::from_raw(raw.access_token))
        }
        TokenType::UserOrClient => {
            let user = ResolvedToken::from_raw(manager.user_token(ctx, params).await?.access_token);
            if user.is_absent() {
                debug!("No user token available, falling back to client credentials");
                let raw = manager.client_token(ctx).await?;
                return Ok(ResolvedToken::from_raw(raw.access_token));
            }
            Ok(user)
        }
    }
}
