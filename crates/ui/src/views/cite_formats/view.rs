use dioxus::prelude::*;

use super::format_editor::CiteFormatSettings;
use super::state::{CiteFormatsController, use_cite_formats};
use crate::components::{Icon, SettingItem};
use crate::context::AppContext;
use crate::views::ViewState;

/// Settings section listing every citation format with its editor.
///
/// Edits are applied to the local list right away and persisted in the
/// background through `CiteFormatService`.
#[component]
pub fn CiteFormatsView() -> Element {
    let service = use_context::<AppContext>().cite_formats();
    let controller = use_cite_formats(service);
    rsx! {
        CiteFormatsPanel { controller }
    }
}

#[component]
pub fn CiteFormatsPanel(controller: CiteFormatsController) -> Element {
    let status_label = controller.save_state.read().label();
    let add_format = controller.add_format;

    let body = match controller.load_state() {
        ViewState::Loading | ViewState::Idle => rsx! {
            p { class: "settings-status", "Loading..." }
        },
        ViewState::Error(err) => {
            let error_message = err.message();
            rsx! {
                p { class: "settings-error", "{error_message}" }
            }
        }
        ViewState::Ready(_) => {
            let entries = controller.entries.read().clone();
            rsx! {
                for (index, entry) in entries.into_iter().enumerate() {
                    CiteFormatSettings {
                        key: "{entry.key}",
                        format: entry.format,
                        index,
                        update_format: controller.update_format,
                        remove_format: controller.remove_format,
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page settings-page",
            SettingItem {
                name: "Citation Formats",
                is_heading: true,
                description: rsx! {
                    "Citation formats can be applied from the command palette and assigned hotkeys."
                },
                button {
                    class: "mod-cta",
                    r#type: "button",
                    onclick: move |_: MouseEvent| add_format.call(()),
                    Icon { name: "plus" }
                    "Add Citation Format"
                }
            }
            if let Some(label) = status_label {
                p { class: "settings-status", "{label}" }
            }
            {body}
        }
    }
}
