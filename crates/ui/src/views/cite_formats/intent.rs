use cite_core::CslStyle;
use cite_core::model::{CitationFormat, FormatKind};
use dioxus::prelude::*;

/// User actions on one format editor.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatIntent {
    Rename(String),
    /// Raw value of the output-format select.
    ChangeKind(String),
    EditTemplate(String),
    PickStyle(Option<CslStyle>),
    EditCommand(String),
    ToggleBrackets,
    Remove,
}

/// Apply an edit intent to `format`. `None` for `Remove` and unparsable kinds.
#[must_use]
pub fn apply_intent(format: CitationFormat, intent: FormatIntent) -> Option<CitationFormat> {
    match intent {
        FormatIntent::Rename(name) => Some(format.with_name(name)),
        FormatIntent::ChangeKind(raw) => match raw.parse::<FormatKind>() {
            Ok(kind) => Some(format.with_kind(kind)),
            Err(err) => {
                tracing::warn!(%err, "ignoring unknown format kind");
                None
            }
        },
        FormatIntent::EditTemplate(text) => Some(format.with_template(text)),
        FormatIntent::PickStyle(style) => Some(format.with_csl_style(style.map(|style| style.value))),
        FormatIntent::EditCommand(text) => Some(format.with_command(text)),
        FormatIntent::ToggleBrackets => Some(format.with_brackets_toggled()),
        FormatIntent::Remove => None,
    }
}

/// Routes editor intents to the owner's callbacks.
///
/// Edits call `update_format(index, record)` with the complete replacement
/// record; `Remove` calls `remove_format(index)`.
pub fn use_format_dispatcher(
    format: &CitationFormat,
    index: usize,
    update_format: Callback<(usize, CitationFormat)>,
    remove_format: Callback<usize>,
) -> Callback<FormatIntent> {
    let format = format.clone();
    use_callback(move |intent: FormatIntent| {
        if intent == FormatIntent::Remove {
            remove_format.call(index);
            return;
        }
        if let Some(next) = apply_intent(format.clone(), intent) {
            tracing::debug!(index, kind = %next.kind(), "citation format edited");
            update_format.call((index, next));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_keeps_options() {
        let format = CitationFormat::new("A", FormatKind::Biblatex).with_command("parencite");
        let next = apply_intent(format.clone(), FormatIntent::Rename("B".into())).unwrap();
        assert_eq!(next.name(), "B");
        assert_eq!(next.options(), format.options());
    }

    #[test]
    fn kind_change_parses_select_value() {
        let format = CitationFormat::new("A", FormatKind::Pandoc);
        let next = apply_intent(format, FormatIntent::ChangeKind("biblatex".into())).unwrap();
        assert_eq!(next.command(), Some("autocite"));
    }

    #[test]
    fn unknown_kind_and_remove_produce_no_record() {
        let format = CitationFormat::new("A", FormatKind::Pandoc);
        assert_eq!(
            apply_intent(format.clone(), FormatIntent::ChangeKind("markdown".into())),
            None
        );
        assert_eq!(apply_intent(format, FormatIntent::Remove), None);
    }

    #[test]
    fn picking_style_stores_identifier() {
        let format = CitationFormat::new("A", FormatKind::FormattedCitation);
        let style = CslStyle::new("apa", "APA");
        let next = apply_intent(format, FormatIntent::PickStyle(Some(style))).unwrap();
        assert_eq!(next.csl_style(), Some("apa"));
        let cleared = apply_intent(next, FormatIntent::PickStyle(None)).unwrap();
        assert_eq!(cleared.csl_style(), None);
    }
}
