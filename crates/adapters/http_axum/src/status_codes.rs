//! HTTP status → error code mapping.

use axum::http::StatusCode;

use faultline_app::ports::StatusCodeMapper;

/// Code returned for statuses without a canonical reason phrase.
pub const UNKNOWN_HTTP_CODE: &str = "HTTP_UNKNOWN";

/// Maps a status to `HTTP_` followed by its canonical reason phrase in
/// screaming snake case, e.g. `404` → `HTTP_NOT_FOUND`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpStatusCodeMapper;

impl StatusCodeMapper for HttpStatusCodeMapper {
    fn map_status(&self, status: u16) -> String {
        StatusCode::from_u16(status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map_or_else(
                || UNKNOWN_HTTP_CODE.to_string(),
                |reason| format!("HTTP_{}", screaming_snake(reason)),
            )
    }
}

fn screaming_snake(reason: &str) -> String {
    let mut out = String::with_capacity(reason.len());
    let mut separate = false;
    for ch in reason.chars() {
        if ch.is_ascii_alphanumeric() {
            if separate && !out.is_empty() {
                out.push('_');
            }
            separate = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            separate = true;
        }
    }
    out
}
