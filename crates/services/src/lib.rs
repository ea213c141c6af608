#![forbid(unsafe_code)]

pub mod app_services;
pub mod cite_format_service;
pub mod csl_search;
pub mod error;

pub use app_services::AppServices;
pub use cite_format_service::CiteFormatService;
pub use csl_search::{CatalogSearch, CslStyleSearch};
pub use error::{AppServicesError, CiteFormatServiceError, CslSearchError};
