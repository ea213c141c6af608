use serde::{Deserialize, Serialize};

use super::format::FormatKind;

/// Mode-specific settings of a citation format.
///
/// Each variant carries exactly the fields its kind exposes, so a record can
/// never hold a stale field from another mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatOptions {
    Latex {
        command: String,
    },
    Biblatex {
        command: String,
    },
    Pandoc {
        brackets: Option<bool>,
    },
    ObsidianLink {
        brackets: Option<bool>,
    },
    FormattedCitation {
        csl_style: Option<String>,
    },
    FormattedBibliography {
        csl_style: Option<String>,
    },
    Template {
        template: Option<String>,
        csl_style: Option<String>,
    },
}

impl FormatOptions {
    /// Options of a freshly selected kind, with no carried-over values.
    #[must_use]
    pub fn empty(kind: FormatKind) -> Self {
        Self::build(kind, None, None, None, None)
    }

    fn build(
        kind: FormatKind,
        command: Option<String>,
        template: Option<String>,
        csl_style: Option<String>,
        brackets: Option<bool>,
    ) -> Self {
        let command = command
            .or_else(|| kind.default_command().map(str::to_owned))
            .unwrap_or_default();
        match kind {
            FormatKind::Latex => FormatOptions::Latex { command },
            FormatKind::Biblatex => FormatOptions::Biblatex { command },
            FormatKind::Pandoc => FormatOptions::Pandoc { brackets },
            FormatKind::ObsidianLink => FormatOptions::ObsidianLink { brackets },
            FormatKind::FormattedCitation => FormatOptions::FormattedCitation { csl_style },
            FormatKind::FormattedBibliography => FormatOptions::FormattedBibliography { csl_style },
            FormatKind::Template => FormatOptions::Template {
                template,
                csl_style,
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormatKind {
        match self {
            FormatOptions::Latex { .. } => FormatKind::Latex,
            FormatOptions::Biblatex { .. } => FormatKind::Biblatex,
            FormatOptions::Pandoc { .. } => FormatKind::Pandoc,
            FormatOptions::ObsidianLink { .. } => FormatKind::ObsidianLink,
            FormatOptions::FormattedCitation { .. } => FormatKind::FormattedCitation,
            FormatOptions::FormattedBibliography { .. } => FormatKind::FormattedBibliography,
            FormatOptions::Template { .. } => FormatKind::Template,
        }
    }

    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            FormatOptions::Latex { command } | FormatOptions::Biblatex { command } => {
                Some(command.as_str())
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn template(&self) -> Option<&str> {
        match self {
            FormatOptions::Template { template, .. } => template.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn csl_style(&self) -> Option<&str> {
        match self {
            FormatOptions::FormattedCitation { csl_style }
            | FormatOptions::FormattedBibliography { csl_style }
            | FormatOptions::Template { csl_style, .. } => csl_style.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn brackets(&self) -> Option<bool> {
        match self {
            FormatOptions::Pandoc { brackets } | FormatOptions::ObsidianLink { brackets } => {
                *brackets
            }
            _ => None,
        }
    }
}

/// One named citation output format.
///
/// Every edit consumes the record and returns its replacement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CitationFormatRecord", into = "CitationFormatRecord")]
pub struct CitationFormat {
    name: String,
    options: FormatOptions,
}

impl CitationFormat {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FormatKind) -> Self {
        Self {
            name: name.into(),
            options: FormatOptions::empty(kind),
        }
    }

    #[must_use]
    pub fn from_options(name: impl Into<String>, options: FormatOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> FormatKind {
        self.options.kind()
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.options.command()
    }

    #[must_use]
    pub fn template(&self) -> Option<&str> {
        self.options.template()
    }

    #[must_use]
    pub fn csl_style(&self) -> Option<&str> {
        self.options.csl_style()
    }

    #[must_use]
    pub fn brackets(&self) -> Option<bool> {
        self.options.brackets()
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Switch the output kind.
    ///
    /// LaTeX and BibLaTeX always restart from their default command. A
    /// template body survives only a template-to-template switch, brackets
    /// only a switch between the two bracketed kinds, and the CSL style only
    /// a switch between kinds that both use the style picker.
    #[must_use]
    pub fn with_kind(self, kind: FormatKind) -> Self {
        let options = match kind {
            FormatKind::Latex | FormatKind::Biblatex => FormatOptions::empty(kind),
            FormatKind::Pandoc | FormatKind::ObsidianLink => FormatOptions::build(
                kind,
                None,
                None,
                None,
                self.options.brackets(),
            ),
            FormatKind::FormattedCitation | FormatKind::FormattedBibliography => {
                FormatOptions::build(
                    kind,
                    None,
                    None,
                    self.options.csl_style().map(str::to_owned),
                    None,
                )
            }
            FormatKind::Template => FormatOptions::build(
                kind,
                None,
                self.options.template().map(str::to_owned),
                self.options.csl_style().map(str::to_owned),
                None,
            ),
        };
        Self {
            name: self.name,
            options,
        }
    }

    #[must_use]
    pub fn with_template(self, text: impl Into<String>) -> Self {
        let options = match self.options {
            FormatOptions::Template { csl_style, .. } => FormatOptions::Template {
                template: Some(text.into()),
                csl_style,
            },
            other => other,
        };
        Self {
            name: self.name,
            options,
        }
    }

    /// Set or clear the CSL style. Clearing leaves the field absent.
    #[must_use]
    pub fn with_csl_style(self, style: Option<String>) -> Self {
        let options = match self.options {
            FormatOptions::FormattedCitation { .. } => {
                FormatOptions::FormattedCitation { csl_style: style }
            }
            FormatOptions::FormattedBibliography { .. } => {
                FormatOptions::FormattedBibliography { csl_style: style }
            }
            FormatOptions::Template { template, .. } => FormatOptions::Template {
                template,
                csl_style: style,
            },
            other => other,
        };
        Self {
            name: self.name,
            options,
        }
    }

    #[must_use]
    pub fn with_command(self, text: impl Into<String>) -> Self {
        let options = match self.options {
            FormatOptions::Latex { .. } => FormatOptions::Latex {
                command: text.into(),
            },
            FormatOptions::Biblatex { .. } => FormatOptions::Biblatex {
                command: text.into(),
            },
            other => other,
        };
        Self {
            name: self.name,
            options,
        }
    }

    /// Flip the brackets flag; an unset flag counts as `false`.
    #[must_use]
    pub fn with_brackets_toggled(self) -> Self {
        let options = match self.options {
            FormatOptions::Pandoc { brackets } => FormatOptions::Pandoc {
                brackets: Some(!brackets.unwrap_or(false)),
            },
            FormatOptions::ObsidianLink { brackets } => FormatOptions::ObsidianLink {
                brackets: Some(!brackets.unwrap_or(false)),
            },
            other => other,
        };
        Self {
            name: self.name,
            options,
        }
    }
}

/// Flat persisted shape of a citation format.
///
/// Unset fields are omitted on write. On read, fields that do not belong to
/// the record's kind are dropped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CitationFormatRecord {
    #[serde(default)]
    pub name: String,
    pub format: FormatKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(
        rename = "cslStyle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub csl_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brackets: Option<bool>,
}

impl From<CitationFormatRecord> for CitationFormat {
    fn from(record: CitationFormatRecord) -> Self {
        let options = FormatOptions::build(
            record.format,
            record.command,
            record.template,
            record.csl_style.filter(|style| !style.is_empty()),
            record.brackets,
        );
        Self {
            name: record.name,
            options,
        }
    }
}

impl From<CitationFormat> for CitationFormatRecord {
    fn from(format: CitationFormat) -> Self {
        let kind = format.kind();
        let command = format.command().map(str::to_owned);
        let template = format.template().map(str::to_owned);
        let csl_style = format.csl_style().map(str::to_owned);
        let brackets = format.brackets();
        Self {
            name: format.name,
            format: kind,
            command,
            template,
            csl_style,
            brackets,
        }
    }
}
