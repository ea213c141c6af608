use serde::{Deserialize, Serialize};

use super::citation_format::CitationFormat;
use super::format::FormatKind;
use crate::error::FormatError;

/// Persisted citation settings: the ordered list of format entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationSettings {
    #[serde(rename = "citeFormats", default)]
    cite_formats: Vec<CitationFormat>,
}

impl CitationSettings {
    #[must_use]
    pub fn new(cite_formats: Vec<CitationFormat>) -> Self {
        Self { cite_formats }
    }

    #[must_use]
    pub fn cite_formats(&self) -> &[CitationFormat] {
        &self.cite_formats
    }

    #[must_use]
    pub fn into_cite_formats(self) -> Vec<CitationFormat> {
        self.cite_formats
    }

    /// Append a new entry and return its index.
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        self.cite_formats
            .push(CitationFormat::new(name, FormatKind::FormattedCitation));
        self.cite_formats.len() - 1
    }

    /// Replace the entry at `index` with `format`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::IndexOutOfRange` if no entry exists at `index`.
    pub fn update(&mut self, index: usize, format: CitationFormat) -> Result<(), FormatError> {
        let len = self.cite_formats.len();
        let slot = self
            .cite_formats
            .get_mut(index)
            .ok_or(FormatError::IndexOutOfRange { index, len })?;
        *slot = format;
        Ok(())
    }

    /// Remove and return the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::IndexOutOfRange` if no entry exists at `index`.
    pub fn remove(&mut self, index: usize) -> Result<CitationFormat, FormatError> {
        let len = self.cite_formats.len();
        if index >= len {
            return Err(FormatError::IndexOutOfRange { index, len });
        }
        Ok(self.cite_formats.remove(index))
    }

    /// Default name for the next added entry.
    #[must_use]
    pub fn next_format_name(&self) -> String {
        format!("Format #{}", self.cite_formats.len() + 1)
    }
}
