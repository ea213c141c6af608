use cite_core::model::{CitationFormat, FormatKind};
use cite_core::{CslCatalog, CslStyle};

/// UI-ready state of one format editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatEditorVm {
    pub name: String,
    pub kind: FormatKind,
    pub show_template: bool,
    pub template: String,
    /// Picker label, present only when the style picker is shown.
    pub style_label: Option<&'static str>,
    pub default_style: Option<CslStyle>,
    pub show_command: bool,
    pub command: String,
    pub show_brackets: bool,
    pub brackets_enabled: bool,
}

impl FormatEditorVm {
    #[must_use]
    pub fn new(format: &CitationFormat, catalog: &CslCatalog) -> Self {
        let kind = format.kind();
        let fields = kind.fields();
        Self {
            name: format.name().to_owned(),
            kind,
            show_template: fields.template,
            template: format.template().unwrap_or_default().to_owned(),
            style_label: kind.style_label().filter(|_| fields.csl_style),
            default_style: catalog.resolve_optional(format.csl_style()),
            show_command: fields.command,
            command: format.command().unwrap_or_default().to_owned(),
            show_brackets: fields.brackets,
            brackets_enabled: format.brackets().unwrap_or(false),
        }
    }

    #[must_use]
    pub fn show_style(&self) -> bool {
        self.style_label.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindOptionVm {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options of the output-format select, in display order.
#[must_use]
pub fn kind_options() -> Vec<KindOptionVm> {
    FormatKind::ALL
        .into_iter()
        .map(|kind| KindOptionVm {
            value: kind.value(),
            label: kind.label(),
        })
        .collect()
}
