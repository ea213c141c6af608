use std::sync::Arc;

use cite_core::model::{CitationFormat, CitationSettings};
use storage::repository::SettingsRepository;
use tokio::sync::Mutex;

use crate::error::CiteFormatServiceError;

/// Owns the list of citation formats: add, replace and remove entries by index.
#[derive(Clone)]
pub struct CiteFormatService {
    repo: Arc<dyn SettingsRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl CiteFormatService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self {
            repo,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the current list of formats.
    ///
    /// # Errors
    ///
    /// Returns `CiteFormatServiceError` on storage failures.
    pub async fn load(&self) -> Result<Vec<CitationFormat>, CiteFormatServiceError> {
        let settings = self.repo.load_settings().await?;
        Ok(settings.into_cite_formats())
    }

    /// Append a new format; a blank name gets a numbered default.
    ///
    /// # Errors
    ///
    /// Returns `CiteFormatServiceError` on storage failures.
    pub async fn add_format(
        &self,
        name: Option<String>,
    ) -> Result<Vec<CitationFormat>, CiteFormatServiceError> {
        self.mutate(|settings| {
            let name = name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| settings.next_format_name());
            let index = settings.add(name);
            tracing::info!(index, "added citation format");
            Ok(())
        })
        .await
    }

    /// Replace the format at `index` with `format` as a whole.
    ///
    /// # Errors
    ///
    /// Returns `CiteFormatServiceError` if `index` is out of range or storage fails.
    pub async fn update_format(
        &self,
        index: usize,
        format: CitationFormat,
    ) -> Result<Vec<CitationFormat>, CiteFormatServiceError> {
        self.mutate(|settings| {
            tracing::debug!(index, kind = %format.kind(), "updating citation format");
            settings.update(index, format)?;
            Ok(())
        })
        .await
    }

    /// Delete the format at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CiteFormatServiceError` if `index` is out of range or storage fails.
    pub async fn remove_format(
        &self,
        index: usize,
    ) -> Result<Vec<CitationFormat>, CiteFormatServiceError> {
        self.mutate(|settings| {
            let removed = settings.remove(index)?;
            tracing::info!(index, name = removed.name(), "removed citation format");
            Ok(())
        })
        .await
    }

    /// Pretty-printed JSON of the persisted settings.
    ///
    /// # Errors
    ///
    /// Returns `CiteFormatServiceError` on storage or serialization failures.
    pub async fn export_json(&self) -> Result<String, CiteFormatServiceError> {
        let settings = self.repo.load_settings().await?;
        Ok(serde_json::to_string_pretty(&settings)?)
    }

    async fn mutate<F>(&self, apply: F) -> Result<Vec<CitationFormat>, CiteFormatServiceError>
    where
        F: FnOnce(&mut CitationSettings) -> Result<(), CiteFormatServiceError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.repo.load_settings().await?;
        apply(&mut settings)?;
        self.repo.save_settings(&settings).await?;
        Ok(settings.into_cite_formats())
    }
}
