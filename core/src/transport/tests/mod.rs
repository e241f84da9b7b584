//! Unit tests for transports and the transport registry
