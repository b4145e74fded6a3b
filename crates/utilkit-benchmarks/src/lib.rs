//! utilkit benchmarking suite
//!
//! Benchmarks for the sequence operations and document parsing, plus the
//! fixtures they share.

pub mod common;

pub use common::*;
