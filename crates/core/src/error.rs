//! Error types for the host-side helpers.
//!
//! The normalization transform itself is total and never returns these.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable conditions a host reports to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Error reading file: {0}")]
    IoError(#[from] std::io::Error),

    /// Nothing but whitespace was submitted for processing.
    #[error("Please enter some text to process")]
    EmptyInput,

    /// The file is neither typed as text nor named `*.txt`.
    #[error("Unsupported file {0}: please select a text file (.txt)")]
    UnsupportedFile(String),

    /// A mode name that is not one of the three known modes.
    #[error("Unknown format mode: {0}")]
    UnknownMode(String),
}

impl Error {
    /// Short message suitable for a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::IoError(_) => "Error reading file",
            Error::EmptyInput => "Please enter some text to process",
            Error::UnsupportedFile(_) => "Please select a text file (.txt)",
            Error::UnknownMode(_) => "Please choose a valid format option",
        }
    }
}
