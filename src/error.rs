use thiserror::Error;

/// Main error type for the search client.
#[derive(Error, Debug)]
pub enum CseError {
    /// A flag name or wire token that is not registered in the descriptor
    /// table for its enumeration type.
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
    /// A malformed descriptor table (empty, or a name/token bound twice).
    #[error("flag table misconfigured: {0}")]
    Configuration(String),
    /// A request argument outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
    /// An error reported by the API in the response body.
    #[error("[{code}: {status}] {message}")]
    Api {
        code: i64,
        status: String,
        message: String,
    },
    /// The active API key has run out of uses.
    #[error("100 queries/day quota has been exceeded for this API key")]
    QuotaExceeded,
    /// A transport-level or body-decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A specialized `Result` type for search client operations.
pub type Result<T> = std::result::Result<T, CseError>;
