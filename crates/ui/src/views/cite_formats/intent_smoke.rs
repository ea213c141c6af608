use cite_core::model::{CitationFormat, CitationSettings, FormatKind};
use storage::repository::{SettingsRepository, Storage};

use super::intent::FormatIntent;
use crate::views::test_harness::{
    ControllerHandles, EditorHandles, ViewHarness, ViewKind, setup_view_harness,
};

async fn seeded_storage(formats: Vec<CitationFormat>) -> Storage {
    let storage = Storage::in_memory();
    storage
        .settings
        .save_settings(&CitationSettings::new(formats))
        .await
        .expect("save settings");
    storage
}

async fn stored_formats(harness: &ViewHarness) -> Vec<CitationFormat> {
    harness
        .storage
        .settings
        .load_settings()
        .await
        .expect("load settings")
        .into_cite_formats()
}

#[tokio::test(flavor = "current_thread")]
async fn editor_intents_emit_index_and_full_record() {
    let format = CitationFormat::new("Md", FormatKind::Pandoc).with_brackets_toggled();
    let handles = EditorHandles::default();
    let mut harness = setup_view_harness(
        ViewKind::EditorIntents {
            format: format.clone(),
            index: 2,
            handles: handles.clone(),
        },
        Storage::in_memory(),
    );
    harness.rebuild();

    let dispatch = handles.dispatch();
    harness.in_runtime(|| {
        dispatch.call(FormatIntent::ToggleBrackets);
        dispatch.call(FormatIntent::ChangeKind("latex".into()));
        dispatch.call(FormatIntent::ChangeKind("bogus".into()));
        dispatch.call(FormatIntent::Rename("Inline".into()));
        dispatch.call(FormatIntent::Remove);
    });

    let updates = handles.updates();
    assert_eq!(updates.len(), 3, "{updates:?}");
    assert!(updates.iter().all(|(index, _)| *index == 2), "{updates:?}");

    let toggled = &updates[0].1;
    assert_eq!(toggled.name(), "Md");
    assert_eq!(toggled.brackets(), Some(false));

    let latex = &updates[1].1;
    assert_eq!(latex.kind(), FormatKind::Latex);
    assert_eq!(latex.name(), "Md");
    assert_eq!(latex.command(), Some("cite"));
    assert_eq!(latex.brackets(), None);

    let renamed = &updates[2].1;
    assert_eq!(renamed.name(), "Inline");
    assert_eq!(renamed.options(), format.options());

    assert_eq!(handles.removals(), vec![2]);
}

#[tokio::test(flavor = "current_thread")]
async fn list_edits_apply_locally_and_persist() {
    let first = CitationFormat::new("A", FormatKind::Pandoc);
    let second = CitationFormat::new("B", FormatKind::Biblatex);
    let storage = seeded_storage(vec![first.clone(), second.clone()]).await;
    let handles = ControllerHandles::default();
    let mut harness = setup_view_harness(ViewKind::Controller(handles.clone()), storage);
    harness.rebuild();
    harness.settle().await;

    let controller = handles.controller();
    let second_key = harness.in_runtime(|| controller.entries.peek()[1].key);

    harness.in_runtime(|| {
        controller
            .update_format
            .call((0, first.clone().with_kind(FormatKind::Latex)));
    });
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Citation Command"), "missing latex editor in {html}");
    let stored = stored_formats(&harness).await;
    assert_eq!(stored[0].kind(), FormatKind::Latex);
    assert_eq!(stored[0].command(), Some("cite"));
    assert_eq!(stored[1], second);

    harness.in_runtime(|| controller.remove_format.call(0));
    let local = harness.in_runtime(|| controller.entries.peek().clone());
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].format, second);
    assert_eq!(local[0].key, second_key, "surviving row changed its key");

    harness.settle().await;
    let stored = stored_formats(&harness).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name(), "B");

    let html = harness.render();
    assert_eq!(html.matches("zt-format__delete-btn").count(), 1, "{html}");
    assert!(html.contains("Saved"), "missing save status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn add_keeps_edit_made_while_saving() {
    let first = CitationFormat::new("A", FormatKind::Pandoc);
    let storage = seeded_storage(vec![first.clone()]).await;
    let handles = ControllerHandles::default();
    let mut harness = setup_view_harness(ViewKind::Controller(handles.clone()), storage);
    harness.rebuild();
    harness.settle().await;

    let controller = handles.controller();
    harness.in_runtime(|| {
        controller.add_format.call(());
        controller
            .update_format
            .call((0, first.clone().with_kind(FormatKind::Latex)));
    });
    harness.settle().await;

    let local = harness.in_runtime(|| controller.formats());
    assert_eq!(local.len(), 2, "{local:?}");
    assert_eq!(local[0].kind(), FormatKind::Latex);
    assert_eq!(local[1].name(), "Format #2");
    assert_eq!(local[1].kind(), FormatKind::FormattedCitation);

    let stored = stored_formats(&harness).await;
    assert_eq!(stored, local);
}
