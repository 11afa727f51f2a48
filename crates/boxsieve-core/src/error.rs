//! Error types shared by the boxsieve crates

use thiserror::Error;

/// Errors reported synchronously to the caller. None of them are transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Mismatched lengths, a probability vector without a background slot,
    /// or a threshold outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
