mod cite_formats;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use cite_formats::{
    CiteFormatSettings, CiteFormatsController, CiteFormatsPanel, CiteFormatsView, FormatEntry,
    FormatIntent, apply_intent, use_cite_formats, use_format_dispatcher,
};
pub use state::{SaveState, ViewError, ViewState, view_state_from_resource};
