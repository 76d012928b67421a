//! Ajax/fetch request classification
//!
//! When authorization fails downstream of the gate, a script-initiated
//! fetch wants a machine-readable 401 while a top-level navigation wants a
//! redirect to the login challenge. This module classifies the request and
//! packages the default failure response.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::BffConfig;
use crate::context::RequestContext;

/// Classify whether the request came from the client-side script layer.
///
/// True if any of the following holds (pure OR, order irrelevant):
/// - the `Sec-Fetch-Mode` header equals `cors` (case-insensitive),
/// - the `X-Requested-With` query parameter equals `XMLHttpRequest`
///   (case-insensitive),
/// - the `X-Requested-With` header equals `XMLHttpRequest`
///   (case-insensitive).
#[must_use]
pub fn is_ajax_request(ctx: &RequestContext) -> bool {
    if ctx
        .header_first("Sec-Fetch-Mode")
        .is_some_and(|v| v.eq_ignore_ascii_case("cors"))
    {
        return true;
    }

    if ctx
        .query_first("X-Requested-With")
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
    {
        return true;
    }

    ctx.header_first("X-Requested-With")
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

/// Default authorization-failure response.
///
/// Script-initiated requests get a 401 with a JSON body; top-level
/// navigations get a 302 redirect to [`BffConfig::login_path`]. Embedders
/// that want different shaping can call [`is_ajax_request`] directly and
/// build their own.
#[must_use]
pub fn challenge_response(ctx: &RequestContext, config: &BffConfig) -> Response {
    if is_ajax_request(ctx) {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "authentication_required",
                "message": "Sign in and retry the request"
            })),
        )
            .into_response()
    } else {
        (
            StatusCode::FOUND,
            [(header::LOCATION, config.login_path.clone())],
        )
            .into_response()
    }
}
