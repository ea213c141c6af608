use cite_core::CslStyle;
use dioxus::prelude::*;

use super::icon::Icon;
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

fn no_options_message(query: &str) -> &'static str {
    if query.trim().is_empty() {
        "Type to search"
    } else {
        "No styles found"
    }
}

/// Searchable, clearable CSL style picker.
///
/// Options come from the injected `CslStyleSearch`; `value` is the style to
/// display as selected.
#[component]
pub fn CslStyleSelect(
    #[props(!optional)] value: Option<CslStyle>,
    on_change: Callback<Option<CslStyle>>,
) -> Element {
    let search = use_context::<AppContext>().csl_search();
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| false);

    let results = use_resource(move || {
        let search = search.clone();
        let query = query();
        async move {
            search.search(&query).await.map_err(|err| {
                tracing::warn!(%err, "csl style search failed");
                ViewError::Search
            })
        }
    });

    let query_value = query();
    let empty_message = no_options_message(&query_value);
    let error_message = ViewError::Search.message();

    rsx! {
        div { class: "zt-multiselect",
            div { class: "zt-multiselect__control",
                Icon { name: "search" }
                if let Some(style) = value.as_ref().filter(|_| query_value.is_empty()) {
                    span { class: "zt-multiselect__value", title: "{style.value}", "{style.label}" }
                }
                input {
                    class: "zt-multiselect__input",
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{query_value}",
                    oninput: move |evt| {
                        query.set(evt.value());
                        open.set(true);
                    },
                    onfocus: move |_| open.set(true),
                }
                if value.is_some() {
                    button {
                        class: "zt-multiselect__clear",
                        r#type: "button",
                        aria_label: "Clear style",
                        onclick: move |_| {
                            query.set(String::new());
                            open.set(false);
                            on_change.call(None);
                        },
                        Icon { name: "x" }
                    }
                }
            }
            if open() {
                div { class: "zt-multiselect__menu",
                    {match view_state_from_resource(results) {
                        ViewState::Ready(styles) if !styles.is_empty() => rsx! {
                            for style in styles {
                                {
                                    let label = style.label.clone();
                                    let key = style.value.clone();
                                    rsx! {
                                        button {
                                            key: "{key}",
                                            class: "zt-multiselect__option",
                                            r#type: "button",
                                            onclick: move |_| {
                                                query.set(String::new());
                                                open.set(false);
                                                on_change.call(Some(style.clone()));
                                            },
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        },
                        ViewState::Ready(_) => rsx! {
                            div { class: "zt-multiselect__empty", "{empty_message}" }
                        },
                        ViewState::Loading => rsx! {
                            div { class: "zt-multiselect__empty", "Loading..." }
                        },
                        ViewState::Error(_) => rsx! {
                            div { class: "zt-multiselect__empty", "{error_message}" }
                        },
                        ViewState::Idle => rsx! {},
                    }}
                }
            }
        }
    }
}
