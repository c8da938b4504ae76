use thiserror::Error;

/// Pagination token codec failures. Always fatal to the call that hit them.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to decode pagination token: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed pagination token payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("failed to serialize cursor map: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors that abort an entire fetch call.
///
/// Per-pod retrieval failures are deliberately absent: those are recovered
/// inside the per-pod fetch and never escalate.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("failed to list pods: {0:#}")]
    PodList(anyhow::Error),
}
