//! The utility functions, one module per independent group.
//!
//! No group calls into another. Argument shape checks shared by the groups
//! live here and always run before any computation.

pub mod answers;
pub mod array;
pub mod math;
pub mod strings;
pub mod users;

use crate::error::{Expected, UtilError, UtilResult};
use crate::types::Value;
use tracing::trace;

// Re-export the entry points under their group-independent names
pub use answers::{check_student_knowledge, grade_answers, Grade};
pub use array::{find_max, find_min, remove_duplicates};
pub use math::{add, divide, multiply, subtract};
pub use strings::{capitalize, is_palindrome, reverse_string};
pub use users::{filter_users_by_age, find_user_by_id, is_email_taken, sort_users_by_name};

/// Borrow the elements of a sequence argument
fn expect_sequence(input: &Value, expected: Expected) -> UtilResult<&[Value]> {
    input.as_array().ok_or_else(|| reject(input, expected))
}

/// Borrow the text of a string argument
fn expect_text(input: &Value) -> UtilResult<&str> {
    input.as_str().ok_or_else(|| reject(input, Expected::String))
}

fn reject(input: &Value, expected: Expected) -> UtilError {
    trace!(kind = input.kind(), %expected, "rejecting argument");
    UtilError::invalid(expected)
}
