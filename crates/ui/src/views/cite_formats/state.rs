use std::sync::Arc;

use cite_core::model::CitationFormat;
use dioxus::prelude::*;
use services::{CiteFormatService, CiteFormatServiceError};

use crate::views::{SaveState, ViewError, ViewState, view_state_from_resource};

/// One editor row: the record plus a render key that survives removals.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatEntry {
    pub key: u64,
    pub format: CitationFormat,
}

/// Local list of formats and the operations that edit and persist it.
#[derive(Clone, Copy)]
pub struct CiteFormatsController {
    pub entries: Signal<Vec<FormatEntry>>,
    pub save_state: Signal<SaveState>,
    pub update_format: Callback<(usize, CitationFormat)>,
    pub remove_format: Callback<usize>,
    pub add_format: Callback<()>,
    resource: Resource<Result<Vec<CitationFormat>, ViewError>>,
}

impl PartialEq for CiteFormatsController {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.save_state == other.save_state
    }
}

impl CiteFormatsController {
    #[must_use]
    pub fn load_state(&self) -> ViewState<Vec<CitationFormat>> {
        view_state_from_resource(self.resource)
    }

    #[must_use]
    pub fn formats(&self) -> Vec<CitationFormat> {
        self.entries
            .read()
            .iter()
            .map(|entry| entry.format.clone())
            .collect()
    }
}

fn next_key(mut counter: Signal<u64>) -> u64 {
    let key = *counter.peek();
    counter.set(key + 1);
    key
}

fn persist<F>(mut save_state: Signal<SaveState>, action: &'static str, save: F)
where
    F: Future<Output = Result<(), CiteFormatServiceError>> + 'static,
{
    spawn(async move {
        save_state.set(SaveState::Saving);
        match save.await {
            Ok(()) => save_state.set(SaveState::Saved),
            Err(err) => {
                tracing::error!(%err, action, "failed to save citation formats");
                save_state.set(SaveState::Error(ViewError::Save));
            }
        }
    });
}

/// Loads the formats once, then applies edits locally and persists them in
/// the background.
pub fn use_cite_formats(service: Arc<CiteFormatService>) -> CiteFormatsController {
    let service_for_resource = Arc::clone(&service);
    let service_for_update = Arc::clone(&service);
    let service_for_remove = Arc::clone(&service);
    let service_for_add = service;

    let mut entries = use_signal(Vec::<FormatEntry>::new);
    let key_counter = use_signal(|| 0_u64);
    let mut loaded = use_signal(|| false);
    let save_state = use_signal(|| SaveState::Idle);

    let resource = use_resource(move || {
        let service = Arc::clone(&service_for_resource);
        async move {
            service.load().await.map_err(|err| {
                tracing::error!(%err, "failed to load citation formats");
                ViewError::Load
            })
        }
    });

    use_effect(move || {
        let list = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .cloned();
        if let Some(list) = list
            && !*loaded.peek()
        {
            let seeded = list
                .into_iter()
                .map(|format| FormatEntry {
                    key: next_key(key_counter),
                    format,
                })
                .collect();
            entries.set(seeded);
            loaded.set(true);
        }
    });

    let update_format = use_callback(move |(index, next): (usize, CitationFormat)| {
        {
            let mut list = entries.write();
            let Some(entry) = list.get_mut(index) else {
                tracing::warn!(index, "update for missing citation format");
                return;
            };
            entry.format = next.clone();
        }
        let service = Arc::clone(&service_for_update);
        persist(save_state, "update", async move {
            service.update_format(index, next).await.map(|_| ())
        });
    });

    let remove_format = use_callback(move |index: usize| {
        {
            let mut list = entries.write();
            if index >= list.len() {
                tracing::warn!(index, "remove for missing citation format");
                return;
            }
            list.remove(index);
        }
        let service = Arc::clone(&service_for_remove);
        persist(save_state, "remove", async move {
            service.remove_format(index).await.map(|_| ())
        });
    });

    let add_format = use_callback(move |()| {
        let service = Arc::clone(&service_for_add);
        let mut entries = entries;
        let mut save_state = save_state;
        spawn(async move {
            save_state.set(SaveState::Saving);
            match service.add_format(None).await {
                Ok(list) => {
                    // Only the appended entry: edits queued behind this add
                    // are already in the local list.
                    if let Some(format) = list.last().cloned() {
                        let key = next_key(key_counter);
                        entries.write().push(FormatEntry { key, format });
                    }
                    save_state.set(SaveState::Saved);
                }
                Err(err) => {
                    tracing::error!(%err, "failed to add citation format");
                    save_state.set(SaveState::Error(ViewError::Save));
                }
            }
        });
    });

    CiteFormatsController {
        entries,
        save_state,
        update_format,
        remove_format,
        add_format,
        resource,
    }
}
