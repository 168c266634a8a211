use thiserror::Error;

/// Failure inside a single extraction pass.
///
/// These never cross an extractor's public boundary: `extract::recover`
/// logs them and returns the partially-filled skeleton instead, so the
/// assembled record always carries all four top-level fields.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
