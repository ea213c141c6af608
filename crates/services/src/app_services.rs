use std::sync::Arc;

use cite_core::CslCatalog;
use storage::repository::Storage;

use crate::cite_format_service::CiteFormatService;
use crate::csl_search::{CatalogSearch, CslStyleSearch};
use crate::error::AppServicesError;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    cite_formats: Arc<CiteFormatService>,
    csl_catalog: CslCatalog,
    csl_search: Arc<dyn CslStyleSearch>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, catalog: CslCatalog) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, catalog))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, catalog: CslCatalog) -> Self {
        let cite_formats = Arc::new(CiteFormatService::new(Arc::clone(&storage.settings)));
        let csl_search: Arc<dyn CslStyleSearch> = Arc::new(CatalogSearch::new(catalog.clone()));
        Self {
            cite_formats,
            csl_catalog: catalog,
            csl_search,
        }
    }

    #[must_use]
    pub fn cite_formats(&self) -> Arc<CiteFormatService> {
        Arc::clone(&self.cite_formats)
    }

    #[must_use]
    pub fn csl_catalog(&self) -> CslCatalog {
        self.csl_catalog.clone()
    }

    #[must_use]
    pub fn csl_search(&self) -> Arc<dyn CslStyleSearch> {
        Arc::clone(&self.csl_search)
    }
}
