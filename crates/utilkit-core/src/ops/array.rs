//! Reductions and deduplication over sequences.

use super::expect_sequence;
use crate::error::{Expected, UtilResult};
use crate::types::Value;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// Largest element of a sequence of numbers; `-inf` when empty.
///
/// Fails when `input` is not a sequence. Non-numeric elements count as
/// `NaN`, which makes the result `NaN`.
pub fn find_max(input: &Value) -> UtilResult<f64> {
    let items = expect_sequence(input, Expected::Array)?;
    Ok(fold_numbers(items, f64::NEG_INFINITY, f64::max))
}

/// Smallest element of a sequence of numbers; `+inf` when empty.
pub fn find_min(input: &Value) -> UtilResult<f64> {
    let items = expect_sequence(input, Expected::Array)?;
    Ok(fold_numbers(items, f64::INFINITY, f64::min))
}

/// Each distinct element once, in order of first occurrence
pub fn remove_duplicates(input: &Value) -> UtilResult<Vec<Value>> {
    let items = expect_sequence(input, Expected::Array)?;
    let distinct = unique(items);
    trace!(
        before = items.len(),
        after = distinct.len(),
        "removed duplicates"
    );
    Ok(distinct)
}

/// Largest of `values`; `-inf` for an empty slice, `NaN` if any value is `NaN`
pub fn max_of(values: &[f64]) -> f64 {
    fold_nan_aware(values.iter().copied(), f64::NEG_INFINITY, f64::max)
}

/// Smallest of `values`; `+inf` for an empty slice, `NaN` if any value is `NaN`
pub fn min_of(values: &[f64]) -> f64 {
    fold_nan_aware(values.iter().copied(), f64::INFINITY, f64::min)
}

/// Distinct elements of `items` in first-occurrence order
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

fn fold_numbers(items: &[Value], identity: f64, pick: fn(f64, f64) -> f64) -> f64 {
    fold_nan_aware(items.iter().map(Value::to_number), identity, pick)
}

// f64::max and f64::min skip NaN operands; the reductions here propagate them.
fn fold_nan_aware<I>(values: I, identity: f64, pick: fn(f64, f64) -> f64) -> f64
where
    I: Iterator<Item = f64>,
{
    values.fold(identity, |acc, x| {
        if acc.is_nan() || x.is_nan() {
            f64::NAN
        } else {
            pick(acc, x)
        }
    })
}
