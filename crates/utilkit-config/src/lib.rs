//! Document loading for utilkit
//!
//! This crate reads user rosters and answer keys from JSON and TOML
//! documents and turns them into the types `utilkit-core` operates on.

pub mod json;
pub mod loader;
pub mod toml;

// Re-export main types
pub use self::toml::{Document, parse_document, serialize_document};
pub use json::{parse_answers_json, parse_document_json, parse_users_json, parse_value_json};
pub use loader::{DocumentFormat, DocumentLoader};

use utilkit_core::error::UtilError;

/// Result type for document operations
pub type ConfigResult<T> = Result<T, UtilError>;
