/// Error types for Minute Scribe
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for adapter internals
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audio decode error: {0}")]
    AudioDecode(String),

    #[error("Whisper error: {0}")]
    Whisper(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Closed failure set for minutes generation.
///
/// Every way a summarize call can fail maps onto exactly one of these;
/// nothing escapes the generator as an uncaught fault. All variants are
/// terminal per call. Retry policy, if any, belongs to the caller.
#[derive(Error, Debug, Clone)]
pub enum SummaryError {
    /// The generator was never initialized with a credential.
    #[error("LLM client not initialized, check API key")]
    Unavailable,

    /// Remote API failure: auth, quota, network, or server-side.
    #[error("LLM API error: {0}")]
    Service(String),

    /// The model returned a payload that does not match the minutes schema.
    #[error("LLM did not return valid minutes JSON: {0}")]
    MalformedResponse(String),

    /// Anything not classified above.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
