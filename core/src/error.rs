use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required relation-addressing parameters are missing or inconsistent.
    /// Indicates a misconfigured route, never a bad request.
    #[error("Unexpected configuration: {0}")]
    Config(String),

    /// The parent record, or one of the addressed child records, is absent
    /// or unrelated.
    #[error("{0}")]
    NotFound(String),

    /// Raised by an access-check hook. Propagated unchanged, never wrapped.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Opaque failure from the underlying data store.
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for query-composition operations
pub type Result<T> = std::result::Result<T, Error>;
