use cite_core::CslStyle;
use cite_core::model::CitationFormat;
use dioxus::prelude::*;

use super::intent::{FormatIntent, use_format_dispatcher};
use crate::components::{CslStyleSelect, Icon};
use crate::context::AppContext;
use crate::vm::{FormatEditorVm, kind_options};

const NUNJUCKS_DOCS: &str = "https://mozilla.github.io/nunjucks/templating.html#variables";
const TEMPLATING_DOCS: &str =
    "https://github.com/mgmeyers/obsidian-zotero-integration/blob/main/docs/Templating.md";
const ZOTERO_STYLES_DOCS: &str = "https://www.zotero.org/support/styles";

/// Editor for one citation format entry.
///
/// Every edit hands the complete replacement record to `update_format`
/// together with `index`; the trash button calls `remove_format(index)`.
#[component]
pub fn CiteFormatSettings(
    format: CitationFormat,
    index: usize,
    update_format: Callback<(usize, CitationFormat)>,
    remove_format: Callback<usize>,
) -> Element {
    let catalog = use_context::<AppContext>().csl_catalog();
    let vm = FormatEditorVm::new(&format, &catalog);

    let dispatch = use_format_dispatcher(&format, index, update_format, remove_format);

    rsx! {
        div { class: "zt-format",
            div { class: "zt-format__form",
                div { class: "zt-format__label", "Name" }
                div { class: "zt-format__input-wrapper",
                    input {
                        r#type: "text",
                        value: "{vm.name}",
                        oninput: move |evt: FormEvent| dispatch.call(FormatIntent::Rename(evt.value())),
                    }
                    div { class: "zt-format__delete",
                        button {
                            class: "zt-format__delete-btn",
                            r#type: "button",
                            aria_label: "Remove format",
                            onclick: move |_| dispatch.call(FormatIntent::Remove),
                            Icon { name: "trash" }
                        }
                    }
                }
            }

            div { class: "zt-format__form",
                div { class: "zt-format__label", "Output Format" }
                div { class: "zt-format__input-wrapper",
                    select {
                        class: "dropdown",
                        value: "{vm.kind.value()}",
                        onchange: move |evt: FormEvent| dispatch.call(FormatIntent::ChangeKind(evt.value())),
                        for kind_option in kind_options() {
                            option {
                                value: "{kind_option.value}",
                                selected: kind_option.value == vm.kind.value(),
                                "{kind_option.label}"
                            }
                        }
                    }
                }
            }

            if vm.show_template {
                div { class: "zt-format__form",
                    div { class: "zt-format__label", "Template" }
                    div { class: "zt-format__input-wrapper",
                        textarea {
                            rows: "4",
                            value: "{vm.template}",
                            oninput: move |evt: FormEvent| dispatch.call(FormatIntent::EditTemplate(evt.value())),
                        }
                    }
                    div { class: "zt-format__input-note",
                        "Citation templates have access to a subset of the Zotero item's data. "
                        "The item's first attachment is available under the "
                        pre { "attachment" }
                        " key. Annotations are not provided. Open the data explorer from the "
                        "command palette to see available template data. Templates are written using "
                        a { href: NUNJUCKS_DOCS, target: "_blank", rel: "noreferrer", "Nunjucks" }
                        ". "
                        a {
                            href: TEMPLATING_DOCS,
                            target: "_blank",
                            rel: "noreferrer",
                            "See the templating documentation here"
                        }
                        "."
                    }
                }
            }

            if let Some(style_label) = vm.style_label {
                div { class: "zt-format__form",
                    div { class: "zt-format__label", "{style_label}" }
                    div { class: "zt-format__input-wrapper",
                        CslStyleSelect {
                            value: vm.default_style.clone(),
                            on_change: move |style: Option<CslStyle>| {
                                dispatch.call(FormatIntent::PickStyle(style));
                            },
                        }
                    }
                    div { class: "zt-format__input-note",
                        "Note, the chosen style must be installed in Zotero. See "
                        a {
                            href: ZOTERO_STYLES_DOCS,
                            target: "_blank",
                            rel: "noreferrer",
                            "Zotero: Citation Styles"
                        }
                    }
                }
            }

            if vm.show_command {
                div { class: "zt-format__form",
                    div { class: "zt-format__label", "Citation Command" }
                    div { class: "zt-format__input-wrapper",
                        input {
                            r#type: "text",
                            value: "{vm.command}",
                            oninput: move |evt: FormEvent| dispatch.call(FormatIntent::EditCommand(evt.value())),
                        }
                    }
                }
            }

            if vm.show_brackets {
                div { class: "zt-format__form",
                    div { class: "zt-format__label", "Include Brackets" }
                    div { class: "zt-format__input-wrapper",
                        div {
                            class: if vm.brackets_enabled {
                                "checkbox-container is-enabled"
                            } else {
                                "checkbox-container"
                            },
                            role: "switch",
                            aria_checked: "{vm.brackets_enabled}",
                            onclick: move |_: MouseEvent| dispatch.call(FormatIntent::ToggleBrackets),
                        }
                    }
                }
            }
        }
    }
}
