use dioxus::prelude::*;

fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "trash" => &[
            "M3 6h18",
            "M8 6V4h8v2",
            "M19 6l-1 14H6L5 6",
            "M10 11v6",
            "M14 11v6",
        ],
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "search" => &["M11 4a7 7 0 1 0 0 14a7 7 0 1 0 0-14z", "M21 21l-4.3-4.3"],
        _ => &[],
    }
}

/// Stroke icon looked up by name.
#[component]
pub fn Icon(name: &'static str) -> Element {
    let paths = icon_paths(name);
    rsx! {
        svg {
            class: "svg-icon icon-{name}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.7",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths {
                path { d: *d }
            }
        }
    }
}
