use dioxus::prelude::*;

#[component]
pub fn SettingItemInfo(
    #[props(into, default)] name: String,
    #[props(default = VNode::empty())] description: Element,
) -> Element {
    rsx! {
        div { class: "setting-item-info",
            div { class: "setting-item-name", "{name}" }
            div { class: "setting-item-description", {description} }
        }
    }
}

/// Shared two-column row: name and description on the left, control on the right.
#[component]
pub fn SettingItem(
    #[props(into, default)] name: String,
    #[props(default = VNode::empty())] description: Element,
    #[props(default)] is_heading: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: if is_heading {
                "zt-setting-item setting-item setting-item-heading"
            } else {
                "zt-setting-item setting-item"
            },
            SettingItemInfo { name, description }
            div { class: "setting-item-control",
                {children}
            }
        }
    }
}
