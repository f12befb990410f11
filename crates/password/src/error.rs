use std::path::PathBuf;
use thiserror::Error;

/// Broad category of an [Error].
///
/// Callers use the kind to decide which parameter a user
/// should change without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Parameters are invalid; nothing was sampled.
    InvalidConfiguration,
    /// The word list could not be obtained.
    WordSourceUnavailable,
    /// No word survived the length and character filter.
    NoEligibleWords,
}

/// Errors generated by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the minimum word length is greater
    /// than the maximum word length.
    #[error("minimum word length {min} exceeds maximum word length {max}")]
    WordLength {
        /// Minimum word length.
        min: usize,
        /// Maximum word length.
        max: usize,
    },

    /// Error generated when a count parameter is zero.
    #[error("{0} must be at least one")]
    ZeroCount(&'static str),

    /// Error generated when special characters are enabled
    /// but the candidate list is empty.
    #[error("special character list must not be empty when special characters are enabled")]
    EmptySpecialCharacters,

    /// Error generated when a word list file cannot be read.
    #[error("word list {} is unavailable: {source}", path.display())]
    WordSourceUnavailable {
        /// Path to the word list.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error generated when a word list file has no entries.
    #[error("word list {} is empty", .0.display())]
    EmptyWordSource(PathBuf),

    /// Error generated when no word in the source satisfies
    /// the length bounds.
    #[error("no words between {min} and {max} characters long")]
    NoEligibleWords {
        /// Minimum word length.
        min: usize,
        /// Maximum word length.
        max: usize,
    },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WordLength { .. }
            | Self::ZeroCount(_)
            | Self::EmptySpecialCharacters => ErrorKind::InvalidConfiguration,
            Self::WordSourceUnavailable { .. } | Self::EmptyWordSource(_) => {
                ErrorKind::WordSourceUnavailable
            }
            Self::NoEligibleWords { .. } => ErrorKind::NoEligibleWords,
        }
    }
}
