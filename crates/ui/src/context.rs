use std::sync::Arc;

use cite_core::CslCatalog;
use services::{CiteFormatService, CslStyleSearch};

pub trait UiApp: Send + Sync {
    fn cite_formats(&self) -> Arc<CiteFormatService>;
    fn csl_catalog(&self) -> CslCatalog;
    fn csl_search(&self) -> Arc<dyn CslStyleSearch>;
}

#[derive(Clone)]
pub struct AppContext {
    cite_formats: Arc<CiteFormatService>,
    csl_catalog: CslCatalog,
    csl_search: Arc<dyn CslStyleSearch>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            cite_formats: app.cite_formats(),
            csl_catalog: app.csl_catalog(),
            csl_search: app.csl_search(),
        }
    }

    #[must_use]
    pub fn cite_formats(&self) -> Arc<CiteFormatService> {
        Arc::clone(&self.cite_formats)
    }

    /// Catalog used to label stored style identifiers without a search round trip.
    #[must_use]
    pub fn csl_catalog(&self) -> CslCatalog {
        self.csl_catalog.clone()
    }

    #[must_use]
    pub fn csl_search(&self) -> Arc<dyn CslStyleSearch> {
        Arc::clone(&self.csl_search)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
