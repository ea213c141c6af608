mod citation_format;
mod format;
mod settings;

pub use citation_format::{CitationFormat, CitationFormatRecord, FormatOptions};
pub use format::{FormatFields, FormatKind};
pub use settings::CitationSettings;
