//! Catalog of CSL styles a format can reference by identifier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// One selectable citation style.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CslStyle {
    pub value: String,
    pub label: String,
}

impl CslStyle {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Entry for an identifier the catalog does not know.
    #[must_use]
    pub fn raw(id: &str) -> Self {
        Self::new(id, id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}

const BUILTIN_STYLES: &[(&str, &str)] = &[
    ("apa", "American Psychological Association 7th edition"),
    ("chicago-author-date", "Chicago Manual of Style 17th edition (author-date)"),
    ("chicago-note-bibliography", "Chicago Manual of Style 17th edition (note)"),
    ("modern-language-association", "Modern Language Association 9th edition"),
    ("harvard-cite-them-right", "Cite Them Right 12th edition - Harvard"),
    ("ieee", "IEEE"),
    ("vancouver", "Vancouver"),
    ("nature", "Nature"),
    ("science", "Science"),
    ("cell", "Cell"),
    ("the-lancet", "The Lancet"),
    ("american-medical-association", "American Medical Association 11th edition"),
    ("american-chemical-society", "American Chemical Society"),
    ("american-sociological-association", "American Sociological Association 6th/7th edition"),
    ("american-political-science-association", "American Political Science Association"),
    ("elsevier-harvard", "Elsevier - Harvard (with titles)"),
    ("springer-basic-author-date", "Springer - Basic (author-date)"),
    ("turabian-fullnote-bibliography", "Turabian 9th edition (full note)"),
    ("bluebook-law-review", "Bluebook Law Review"),
    ("din-1505-2", "DIN 1505-2 (Deutsch) - standardized German citation style"),
];

/// Immutable list of known CSL styles, cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CslCatalog {
    styles: Arc<[CslStyle]>,
}

impl CslCatalog {
    #[must_use]
    pub fn new(styles: Vec<CslStyle>) -> Self {
        Self {
            styles: styles.into(),
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_STYLES
                .iter()
                .map(|(value, label)| CslStyle::new(*value, *label))
                .collect(),
        )
    }

    /// Load a catalog from a JSON array of `{ "value", "label" }` objects.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidCatalog` if the JSON does not have that shape.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let styles: Vec<CslStyle> =
            serde_json::from_str(json).map_err(|e| FormatError::InvalidCatalog(e.to_string()))?;
        Ok(Self::new(styles))
    }

    #[must_use]
    pub fn styles(&self) -> &[CslStyle] {
        &self.styles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CslStyle> {
        self.styles.iter().find(|style| style.value == id)
    }

    /// The catalog entry for `id`, or the raw identifier as both value and label.
    #[must_use]
    pub fn resolve(&self, id: &str) -> CslStyle {
        self.find(id).cloned().unwrap_or_else(|| CslStyle::raw(id))
    }

    #[must_use]
    pub fn resolve_optional(&self, id: Option<&str>) -> Option<CslStyle> {
        id.map(|id| self.resolve(id))
    }

    /// Case-insensitive substring search over labels and identifiers.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<CslStyle> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.styles
            .iter()
            .filter(|style| style.matches(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}
