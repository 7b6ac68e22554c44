//! Step definitions for interface tests.

pub mod list_core;
pub mod sort_engine;

/// Parse "1, 18, -3" into integers. An empty string is an empty sequence.
pub fn parse_values(text: &str) -> Vec<i32> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().expect("integer value"))
        .collect()
}
