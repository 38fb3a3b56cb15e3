//! Common utilities and types for the Hermes vehicle

/// Common types used across the codebase
pub mod types;
