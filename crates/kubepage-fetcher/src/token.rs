//! Opaque pagination token codec
//!
//! The wire format is base64 over a JSON object mapping pod name to the
//! ISO-8601 timestamp of the last entry read from that pod. An empty token
//! and an empty cursor map are the same thing. Callers must treat the token
//! as opaque; only round-tripping through this module is guaranteed.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::TokenError;
use kubepage_types::CursorMap;

/// Encode a cursor map into a continuation token. An empty map encodes to
/// the empty string.
pub fn encode(cursors: &CursorMap) -> Result<String, TokenError> {
    if cursors.is_empty() {
        return Ok(String::new());
    }

    let payload = serde_json::to_vec(cursors).map_err(TokenError::Serialize)?;
    Ok(BASE64.encode(payload))
}

/// Decode a continuation token back into a cursor map. The empty string
/// decodes to an empty map, never an error.
pub fn decode(token: &str) -> Result<CursorMap, TokenError> {
    if token.is_empty() {
        return Ok(CursorMap::new());
    }

    let payload = BASE64.decode(token)?;
    serde_json::from_slice(&payload).map_err(TokenError::Payload)
}
