//! Core data types for utilkit.
//!
//! This module provides the types the operation groups work on:
//! - `Value` for dynamically typed arguments
//! - `User` records and the `UserRecord` accessor trait
//! - `AnswerMap` answer sheets

pub mod user;
pub mod value;

use indexmap::IndexMap;

// Re-export all public types
pub use user::{User, UserRecord};
pub use value::Value;

/// Answers keyed by question, in the order they were given
pub type AnswerMap = IndexMap<String, Value>;
