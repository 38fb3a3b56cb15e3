//! Error types for the Hermes vehicle core

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Hermes core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Heading symbol outside the N/E/S/W alphabet
    #[error("invalid heading symbol '{0}', expected one of N, E, S, W")]
    InvalidHeading(char),
}
