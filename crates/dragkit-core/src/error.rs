//! Error types for dragkit
//!
//! Movement never fails. Errors only surface while building a controller.

/// Errors raised when constructing or configuring a controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The subject identifier did not resolve to an element.
    #[error("subject not found: {0}")]
    SubjectNotFound(String),

    /// A configuration document could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for DragError {
    fn from(e: serde_json::Error) -> Self {
        DragError::InvalidConfig(e.to_string())
    }
}
