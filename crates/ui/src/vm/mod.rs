mod format_vm;

pub use format_vm::{FormatEditorVm, KindOptionVm, kind_options};
