//! Parse Gemini responses into plain summary text

use crate::error::ApiError;
use crate::wire::{ErrorResponse, GenerateResponse};
use tracing::warn;

/// Fallback when a failure response carries no usable message.
const GENERIC_FAILURE: &str = "Failed to generate summary";

/// Parse a raw response body into summary text.
///
/// `ok` is whether the HTTP status was 2xx. On failure the service's
/// embedded `error.message` is surfaced verbatim when present, otherwise
/// a generic message. On success exactly the first candidate's first
/// part is returned; a success body without one is a fatal
/// [`ApiError::Malformed`], never silently defaulted.
pub fn parse_response(ok: bool, body: &str) -> Result<String, ApiError> {
    if !ok {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                warn!("error response carried no message field");
                GENERIC_FAILURE.to_string()
            });
        return Err(ApiError::Service(message));
    }

    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Malformed(format!("invalid JSON: {}", e)))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| ApiError::Malformed("response carried no candidate text".to_string()))
}
