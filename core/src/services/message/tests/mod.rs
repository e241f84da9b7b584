//! Unit tests for the message builder

#[cfg(test)]
pub mod builder_tests;
