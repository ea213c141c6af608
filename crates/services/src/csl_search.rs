use async_trait::async_trait;
use cite_core::{CslCatalog, CslStyle};

use crate::error::CslSearchError;

/// Asynchronous lookup of CSL styles by free-text query.
#[async_trait]
pub trait CslStyleSearch: Send + Sync {
    /// Styles matching `query`, best matches first.
    ///
    /// # Errors
    ///
    /// Returns `CslSearchError` if the backing source cannot be queried.
    async fn search(&self, query: &str) -> Result<Vec<CslStyle>, CslSearchError>;
}

/// Search over an in-process catalog.
#[derive(Clone, Debug)]
pub struct CatalogSearch {
    catalog: CslCatalog,
    limit: usize,
}

impl CatalogSearch {
    pub const DEFAULT_LIMIT: usize = 50;

    #[must_use]
    pub fn new(catalog: CslCatalog) -> Self {
        Self {
            catalog,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[async_trait]
impl CslStyleSearch for CatalogSearch {
    async fn search(&self, query: &str) -> Result<Vec<CslStyle>, CslSearchError> {
        let results = self.catalog.search(query, self.limit);
        tracing::trace!(query, count = results.len(), "csl catalog search");
        Ok(results)
    }
}
