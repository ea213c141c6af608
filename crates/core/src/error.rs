use thiserror::Error;

/// Errors raised by the citation format model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("unknown citation format: {0}")]
    UnknownKind(String),

    #[error("format index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid CSL catalog: {0}")]
    InvalidCatalog(String),
}
