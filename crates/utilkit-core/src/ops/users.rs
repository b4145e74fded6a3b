//! Queries over in-memory user rosters.
//!
//! The typed helpers run over any slice of `UserRecord`s. The dynamic entry
//! points accept a `Value` roster and reject anything that is not a
//! sequence. A dynamic record lacking the field a query looks at never
//! matches that query.

use super::expect_sequence;
use crate::error::{Expected, UtilResult};
use crate::types::{UserRecord, Value};
use std::cmp::Ordering;
use tracing::trace;

/// Users whose age lies in `min_age..=max_age`, in roster order
pub fn filter_users_by_age(users: &Value, min_age: i64, max_age: i64) -> UtilResult<Vec<Value>> {
    let roster = expect_sequence(users, Expected::Users)?;
    Ok(filter_by_age(roster, min_age, max_age))
}

/// A new roster ordered by name; the input is left as it was
pub fn sort_users_by_name(users: &Value) -> UtilResult<Vec<Value>> {
    let roster = expect_sequence(users, Expected::Users)?;
    Ok(sort_by_name(roster))
}

/// First user with the given id
pub fn find_user_by_id(users: &Value, id: i64) -> UtilResult<Option<&Value>> {
    let roster = expect_sequence(users, Expected::Users)?;
    Ok(find_by_id(roster, id))
}

/// Whether any user has exactly this email (case-sensitive)
pub fn is_email_taken(users: &Value, email: &str) -> UtilResult<bool> {
    let roster = expect_sequence(users, Expected::Users)?;
    Ok(email_taken(roster, email))
}

pub fn filter_by_age<R: UserRecord + Clone>(users: &[R], min_age: i64, max_age: i64) -> Vec<R> {
    users
        .iter()
        .filter(|user| {
            user.age()
                .is_some_and(|age| (min_age..=max_age).contains(&age))
        })
        .cloned()
        .collect()
}

/// Stable sort by name; unnamed records go last
pub fn sort_by_name<R: UserRecord + Clone>(users: &[R]) -> Vec<R> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| compare_names(a.name(), b.name()));
    trace!(count = sorted.len(), "sorted users by name");
    sorted
}

pub fn find_by_id<R: UserRecord>(users: &[R], id: i64) -> Option<&R> {
    users.iter().find(|user| user.id() == Some(id))
}

pub fn email_taken<R: UserRecord>(users: &[R], email: &str) -> bool {
    users.iter().any(|user| user.email() == Some(email))
}

fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => collate(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order names alphabetically ignoring case, then by raw code point so
/// names differing only in case still have a fixed order.
fn collate(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| a.cmp(b))
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}
