mod format_editor;
mod intent;
mod state;
mod view;

#[cfg(test)]
mod editor_smoke;
#[cfg(test)]
mod intent_smoke;

pub use format_editor::CiteFormatSettings;
pub use intent::{FormatIntent, apply_intent, use_format_dispatcher};
pub use state::{CiteFormatsController, FormatEntry, use_cite_formats};
pub use view::{CiteFormatsPanel, CiteFormatsView};
