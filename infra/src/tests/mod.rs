//! Unit tests for registry wiring and configuration loading

#[cfg(test)]
pub mod config_tests;
