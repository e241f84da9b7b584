//! Unit tests for the infrastructure transports
