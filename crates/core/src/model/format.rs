use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Output kind of a citation format entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    Latex,
    Biblatex,
    Pandoc,
    ObsidianLink,
    FormattedCitation,
    FormattedBibliography,
    Template,
}

/// Which mode-specific fields a kind exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatFields {
    pub template: bool,
    pub csl_style: bool,
    pub command: bool,
    pub brackets: bool,
}

impl FormatKind {
    /// Every kind, in the order the output-format picker lists them.
    pub const ALL: [FormatKind; 7] = [
        FormatKind::Latex,
        FormatKind::Biblatex,
        FormatKind::Pandoc,
        FormatKind::ObsidianLink,
        FormatKind::FormattedCitation,
        FormatKind::FormattedBibliography,
        FormatKind::Template,
    ];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            FormatKind::Latex => "latex",
            FormatKind::Biblatex => "biblatex",
            FormatKind::Pandoc => "pandoc",
            FormatKind::ObsidianLink => "obsidian-link",
            FormatKind::FormattedCitation => "formatted-citation",
            FormatKind::FormattedBibliography => "formatted-bibliography",
            FormatKind::Template => "template",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Latex => "LaTeX",
            FormatKind::Biblatex => "BibLaTeX",
            FormatKind::Pandoc => "Pandoc",
            FormatKind::ObsidianLink => "Obsidian Link",
            FormatKind::FormattedCitation => "Formatted Citation",
            FormatKind::FormattedBibliography => "Formatted Bibliography",
            FormatKind::Template => "Template",
        }
    }

    /// Field-visibility policy for this kind.
    #[must_use]
    pub fn fields(self) -> FormatFields {
        match self {
            FormatKind::Latex | FormatKind::Biblatex => FormatFields {
                command: true,
                ..FormatFields::default()
            },
            FormatKind::Pandoc | FormatKind::ObsidianLink => FormatFields {
                brackets: true,
                ..FormatFields::default()
            },
            FormatKind::FormattedCitation | FormatKind::FormattedBibliography => FormatFields {
                csl_style: true,
                ..FormatFields::default()
            },
            FormatKind::Template => FormatFields {
                template: true,
                csl_style: true,
                ..FormatFields::default()
            },
        }
    }

    /// Label of the style picker, if this kind shows one.
    #[must_use]
    pub fn style_label(self) -> Option<&'static str> {
        match self {
            FormatKind::Template => Some("Bibliography Style"),
            FormatKind::FormattedCitation | FormatKind::FormattedBibliography => {
                Some("Citation Style")
            }
            FormatKind::Latex
            | FormatKind::Biblatex
            | FormatKind::Pandoc
            | FormatKind::ObsidianLink => None,
        }
    }

    /// Command a record is reset to when switching to this kind.
    #[must_use]
    pub fn default_command(self) -> Option<&'static str> {
        match self {
            FormatKind::Latex => Some("cite"),
            FormatKind::Biblatex => Some("autocite"),
            _ => None,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for FormatKind {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FormatKind::ALL
            .into_iter()
            .find(|kind| kind.value() == value)
            .ok_or_else(|| FormatError::UnknownKind(value.to_string()))
    }
}
