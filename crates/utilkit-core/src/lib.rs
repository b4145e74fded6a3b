//! # utilkit-core
//!
//! Small, independent utility functions and the types they operate on.
//!
//! This crate provides:
//! - `Value`, a tagged union for dynamically typed arguments
//! - `User` records and `AnswerMap` answer sheets
//! - UtilError enum for unified error handling
//! - Five leaf groups of operations (math, array, strings, answers, users)
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Value, User, AnswerMap)
//! - `error`: Error types and result aliases
//! - `ops`: The utility functions, one module per group
//!
//! Each operation group exposes dynamic entry points taking `&Value`, which
//! check the argument's shape before doing any work, and typed helpers over
//! native Rust types that the entry points delegate to.

pub mod error;
pub mod ops;
pub mod types;

// Re-export commonly used types
pub use error::{Expected, UtilError, UtilResult};
pub use types::{AnswerMap, User, UserRecord, Value};
