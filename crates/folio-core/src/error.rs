use thiserror::Error;

/// Top-level error type for folio.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// The knowledge base failed to parse or violates an invariant.
    #[error("knowledge error: {0}")]
    Knowledge(String),

    /// A chat message with no visible content was submitted.
    #[error("message is empty")]
    EmptyMessage,

    /// A pending reply was abandoned before delivery.
    #[error("reply cancelled")]
    Cancelled,

    /// No playground lab has the requested id.
    #[error("unknown lab: {0}")]
    UnknownLab(u32),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
