//! Error types for Jobseek
//!
//! The widget's state transitions are infallible by construction; the error
//! surface is terminal I/O plus defensive checks on the closed filter
//! vocabulary.

use thiserror::Error;

/// Main error type for Jobseek operations
#[derive(Error, Debug)]
pub enum JobSeekError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown option '{option}' for filter category '{category}'")]
    UnknownOption {
        category: &'static str,
        option: String,
    },

    #[error("Search consumer disconnected")]
    SearchChannelClosed,
}

/// Result type alias for Jobseek operations
pub type Result<T> = std::result::Result<T, JobSeekError>;
