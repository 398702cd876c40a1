//! Typed errors for the compliance screening core.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Every component returns
//! typed failures; nothing is swallowed into empty strings.

use thiserror::Error;

use crate::types::DocumentId;

/// Errors that can occur while fetching a document from the remote store.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Credentials were rejected (bad or expired token)
    #[error("document store rejected the credentials")]
    Unauthorized,

    /// The identifier does not resolve to a document
    #[error("document not found: {id}")]
    NotFound { id: DocumentId },

    /// Network or timeout failure; the caller may retry
    #[error("transient I/O error: {0}")]
    TransientIo(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The identifier is empty or still a placeholder value
    #[error("document source misconfigured: {reason}")]
    Misconfigured { reason: String },
}

/// Errors that can occur while extracting text from a raw document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The container itself cannot be parsed (corrupt header, encryption)
    #[error("malformed document: {0}")]
    Malformed(String),

    /// Plain-text bytes are not valid UTF-8
    #[error("invalid UTF-8 in plain-text document: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The document parsed but no page yielded any text
    #[error("document contains no extractable text")]
    NoText,
}

/// Errors that can occur while requesting a compliance report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No API key available for the generative-text service
    #[error("missing API credential for the generative-text service")]
    MissingCredential,

    /// The submitted copy or the reference text was empty
    #[error("nothing to analyze: empty {which}")]
    EmptyInput { which: &'static str },

    /// The generative-text service returned an error
    #[error("generative service error: {0}")]
    Service(String),
}

/// Top-level error for cache and resolver operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error (missing credentials, unset identifier)
    #[error("config error: {reason}")]
    Config { reason: String },

    /// Document fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Text extraction failed
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// Compliance analysis failed
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
