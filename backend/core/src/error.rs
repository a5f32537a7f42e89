use thiserror::Error;

/// Validation failure raised while turning a raw model reply into observations.
///
/// All variants are batch-level: one bad element rejects the entire reply, so
/// the inventory is never left with partial results from a failed analysis.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("missing required field '{0}' in one of the products")]
    MissingField(&'static str),

    #[error("invalid type for field '{field}': expected {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Top-level error type for one analysis pass.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The remote vision provider call failed; surfaced without retry.
    #[error("vision provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
