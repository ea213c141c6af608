#![forbid(unsafe_code)]

pub mod csl;
pub mod error;
pub mod model;

pub use csl::{CslCatalog, CslStyle};
pub use error::FormatError;
