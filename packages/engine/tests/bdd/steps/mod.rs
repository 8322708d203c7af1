//! Step definitions for Cucumber BDD tests
//!
//! This module contains all Given/When/Then step implementations.

pub mod given;
pub mod then;
pub mod when;

/// Split a `|`-separated list from a step argument.
pub fn list(arg: &str) -> Vec<String> {
    arg.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
