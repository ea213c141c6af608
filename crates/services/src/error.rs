//! Shared error types for the services crate.

use thiserror::Error;

use cite_core::FormatError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `CiteFormatService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CiteFormatServiceError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to export settings: {0}")]
    Export(#[from] serde_json::Error),
}

/// Errors emitted by `CslStyleSearch` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CslSearchError {
    #[error("style search unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
