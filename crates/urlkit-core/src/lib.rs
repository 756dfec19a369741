//! Parse URLs into components, rewrite them, and serialize them back.

pub mod config;
pub mod logging;
pub mod url_model;

pub use url_model::{is_valid, validate, Separator, UrlValue, ValidationError, ValidationErrorKind};
