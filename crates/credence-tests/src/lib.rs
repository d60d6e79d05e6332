//! Shared fixtures for Credence integration tests.

pub mod helpers;
