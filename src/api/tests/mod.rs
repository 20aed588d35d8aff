//! Unit tests for the transport mapping layer.
