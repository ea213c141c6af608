use cite_core::model::{CitationFormat, CitationSettings, FormatKind};
use storage::repository::{SettingsRepository, Storage};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn formats_view_renders_stored_entries() {
    let storage = Storage::in_memory();
    let settings = CitationSettings::new(vec![
        CitationFormat::new("Inline LaTeX", FormatKind::Latex),
        CitationFormat::new("Bibliography", FormatKind::FormattedBibliography)
            .with_csl_style(Some("ieee".into())),
    ]);
    storage
        .settings
        .save_settings(&settings)
        .await
        .expect("save settings");

    let mut harness = setup_view_harness(ViewKind::Formats, storage);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Citation Formats"), "missing heading in {html}");
    assert!(html.contains("setting-item-heading"), "missing heading row in {html}");
    assert!(html.contains("Inline LaTeX"), "missing first entry in {html}");
    assert!(html.contains("Bibliography"), "missing second entry in {html}");
    assert!(html.contains("IEEE"), "missing resolved style in {html}");
    assert_eq!(html.matches("zt-format__delete-btn").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn formats_view_renders_add_button_when_empty() {
    let mut harness = setup_view_harness(ViewKind::Formats, Storage::in_memory());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Add Citation Format"), "missing add button in {html}");
    assert!(!html.contains("zt-format__form"), "unexpected editor in {html}");
}
