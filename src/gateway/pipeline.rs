//! BFF pipeline marker middleware and invariant check
//!
//! The gate only makes sense inside a correctly assembled pipeline: the
//! marker middleware must run after routing resolution and before
//! authorization enforcement. [`bff_middleware`] drops the marker,
//! [`check_bff_middleware`] verifies it arrived.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::config::BffConfig;
use crate::context::{BffMarker, RequestContext};
use crate::{Error, Result};

/// Remediation shown when the pipeline is miswired
const MISSING_MIDDLEWARE: &str = "The BFF middleware is missing from the pipeline. \
    Mount `bff_middleware` after routing resolution but before authorization enforcement";

/// Marker middleware proving the BFF pipeline ran for this request.
///
/// Inserts a [`BffMarker`] extension that [`RequestContext::from_parts`]
/// translates into the pipeline flag. Mount it on every router that hosts
/// gated proxy routes:
///
/// ```ignore
/// let app = Router::new()
///     .route("/api/{*path}", any(proxy_handler))
///     .layer(middleware::from_fn(pipeline::bff_middleware));
/// ```
pub async fn bff_middleware(mut request: Request<Body>, next: Next) -> Response {
    request.extensions_mut().insert(BffMarker);
    next.run(request).await
}

/// Verify the marker middleware ran before this gate executes.
///
/// Call once per request before any gated logic. A failure is a deployment
/// bug, not a request-level condition: surface it fatally, never retry it.
/// With enforcement disabled, or with the marker present, this is a no-op.
///
/// # Errors
///
/// Returns [`Error::Config`] with remediation text when enforcement is on
/// and the marker is missing.
pub fn check_bff_middleware(ctx: &RequestContext, config: &BffConfig) -> Result<()> {
    if config.enforce_bff_middleware && !ctx.bff_pipeline_active() {
        return Err(Error::config(MISSING_MIDDLEWARE));
    }
    Ok(())
}
