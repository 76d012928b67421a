//! Per-request view of the inbound HTTP request
//!
//! [`RequestContext`] is the only request state the gate operates on: the
//! inbound headers, the parsed query string, and a flag recording that the
//! BFF marker middleware ran earlier in the pipeline. It is owned by the
//! handling task and never shared across requests.

use axum::http::{HeaderMap, request::Parts};

/// Marker inserted into request extensions by the BFF pipeline middleware.
///
/// Its presence is the proof that the middleware ran for this request;
/// [`RequestContext::from_parts`] translates it into
/// [`RequestContext::bff_pipeline_active`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BffMarker;

/// Read-only request state consumed by the authorization gate
#[derive(Debug, Clone)]
pub struct RequestContext {
    headers: HeaderMap,
    query: Vec<(String, String)>,
    bff_pipeline_active: bool,
}

impl RequestContext {
    /// Create a context from raw headers and an optional raw query string.
    ///
    /// The pipeline marker starts unset; call [`Self::mark_bff_pipeline`] if
    /// the marker middleware ran.
    #[must_use]
    pub fn new(headers: HeaderMap, query: Option<&str>) -> Self {
        let query = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            headers,
            query,
            bff_pipeline_active: false,
        }
    }

    /// Create a context from decomposed request parts.
    ///
    /// Picks up the [`BffMarker`] extension if the pipeline middleware ran.
    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        let mut ctx = Self::new(parts.headers.clone(), parts.uri.query());
        if parts.extensions.get::<BffMarker>().is_some() {
            ctx.mark_bff_pipeline();
        }
        ctx
    }

    /// Record that the BFF pipeline middleware ran for this request
    pub fn mark_bff_pipeline(&mut self) {
        self.bff_pipeline_active = true;
    }

    /// Whether the BFF pipeline middleware ran for this request
    #[must_use]
    pub fn bff_pipeline_active(&self) -> bool {
        self.bff_pipeline_active
    }

    /// First value of a header, if present and valid UTF-8.
    ///
    /// Header name lookup is case-insensitive.
    #[must_use]
    pub fn header_first(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// First value of a query parameter.
    ///
    /// Parameter name lookup is case-insensitive, matching the semantics the
    /// browser-facing frontend relies on.
    #[must_use]
    pub fn query_first(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All inbound headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
