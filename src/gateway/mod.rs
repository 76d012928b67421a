//! The per-request authorization gate
//!
//! Everything the embedding proxy layer calls at the request boundary, in
//! the order it should call it:
//!
//! 1. [`check_bff_middleware`] — confirm the pipeline was assembled
//!    correctly (fatal if not),
//! 2. [`check_anti_forgery_header`] — admit or reject the request,
//! 3. [`crate::tokens::resolve_token`] — obtain the credential to attach,
//! 4. [`is_ajax_request`] / [`challenge_response`] — shape any
//!    authorization failure.

pub mod classify;
pub mod csrf;
pub mod pipeline;

pub use classify::{challenge_response, is_ajax_request};
pub use csrf::check_anti_forgery_header;
pub use pipeline::{bff_middleware, check_bff_middleware};
