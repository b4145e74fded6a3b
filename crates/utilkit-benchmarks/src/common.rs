//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use utilkit_core::{User, Value};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// A roster of `count` users with repeating names and ages
pub fn create_test_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            let name = format!("{}user{}", if i % 2 == 0 { "" } else { "U" }, count - i);
            User::new(i as i64, name, 18 + (i % 60) as i64, format!("user{}@example.com", i))
        })
        .collect()
}

/// A numeric sequence where every value appears about `repeat` times
pub fn create_test_numbers(count: usize, repeat: usize) -> Value {
    (0..count)
        .map(|i| Value::from((i / repeat.max(1)) as f64))
        .collect()
}
