use cite_core::model::{CitationFormat, FormatKind};

use crate::views::test_harness::render_editor;

#[test]
fn latex_editor_shows_command_field_only() {
    let html = render_editor(CitationFormat::new("Cite", FormatKind::Latex));
    assert!(html.contains("Citation Command"), "missing command field in {html}");
    assert!(html.contains("cite"), "missing default command in {html}");
    assert!(!html.contains("Include Brackets"), "unexpected brackets in {html}");
    assert!(!html.contains("Citation Style"), "unexpected style picker in {html}");
    assert!(!html.contains("textarea"), "unexpected template in {html}");
}

#[test]
fn editor_lists_every_output_format() {
    let html = render_editor(CitationFormat::new("Cite", FormatKind::Biblatex));
    for label in [
        "LaTeX",
        "BibLaTeX",
        "Pandoc",
        "Obsidian Link",
        "Formatted Citation",
        "Formatted Bibliography",
        "Template",
    ] {
        assert!(html.contains(label), "missing option {label} in {html}");
    }
    assert!(html.contains("zt-format__delete-btn"), "missing delete button in {html}");
}

#[test]
fn pandoc_editor_reflects_bracket_state() {
    let html = render_editor(CitationFormat::new("Md", FormatKind::Pandoc).with_brackets_toggled());
    assert!(html.contains("Include Brackets"), "missing toggle in {html}");
    assert!(html.contains("checkbox-container is-enabled"), "toggle not enabled in {html}");
    assert!(!html.contains("Citation Command"), "unexpected command in {html}");

    let html = render_editor(CitationFormat::new("Link", FormatKind::ObsidianLink));
    assert!(html.contains("checkbox-container"), "missing toggle in {html}");
    assert!(!html.contains("is-enabled"), "toggle should be off in {html}");
}

#[test]
fn formatted_citation_editor_shows_citation_style_picker() {
    let html = render_editor(CitationFormat::new("Cite", FormatKind::FormattedCitation));
    assert!(html.contains("Citation Style"), "missing style label in {html}");
    assert!(html.contains("Search..."), "missing placeholder in {html}");
    assert!(html.contains("Zotero: Citation Styles"), "missing style note in {html}");
    assert!(!html.contains("textarea"), "unexpected template field in {html}");
}

#[test]
fn template_editor_resolves_stored_style_label() {
    let format = CitationFormat::new("Tpl", FormatKind::Template)
        .with_template("{{title}}")
        .with_csl_style(Some("apa-style-id".into()));
    let html = render_editor(format);
    assert!(html.contains("Bibliography Style"), "missing style label in {html}");
    assert!(html.contains("APA 7th"), "missing resolved label in {html}");
    assert!(html.contains("Nunjucks"), "missing template note in {html}");
    assert!(html.contains("textarea"), "missing template field in {html}");
}

#[test]
fn unknown_style_is_displayed_raw() {
    let format = CitationFormat::new("Tpl", FormatKind::FormattedBibliography)
        .with_csl_style(Some("my-house-style".into()));
    let html = render_editor(format);
    assert!(html.contains("my-house-style"), "missing raw identifier in {html}");
    assert!(html.contains("zt-multiselect__clear"), "missing clear button in {html}");
}

#[test]
fn selected_style_label_is_not_repeated_as_placeholder() {
    let format = CitationFormat::new("Tpl", FormatKind::Template)
        .with_csl_style(Some("apa-style-id".into()));
    let html = render_editor(format);
    assert!(html.contains("placeholder=\"Search...\""), "missing placeholder in {html}");
    assert_eq!(html.matches("APA 7th").count(), 1, "{html}");
}
