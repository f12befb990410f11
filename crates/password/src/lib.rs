#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Memorable passphrase generation.
//!
//! Words are drawn from a filtered word list and formatted
//! with optional numeric and special character suffixes.
//!
//! ```
//! use mempass_password::{generate_passphrases, PassphraseConfig};
//! use secrecy::ExposeSecret;
//!
//! let words = ["apple", "mango", "grape"];
//! let config = PassphraseConfig::builder()
//!     .min_word_length(5)
//!     .max_word_length(5)
//!     .build()?;
//! let results = generate_passphrases(&words, &config)?;
//! assert_eq!(1, results.len());
//! assert!(!results[0].passphrase.expose_secret().is_empty());
//! # Ok::<(), mempass_password::Error>(())
//! ```

mod builder;
mod config;
mod error;
mod filter;
pub mod strength;
mod word_source;

pub use builder::{
    generate, generate_passphrases, generate_passphrases_with_rng,
    PassphraseGenerator, PassphraseResult,
};
pub use config::{
    Capitalization, PassphraseConfig, PassphraseConfigBuilder, Separator,
};
pub use error::{Error, ErrorKind};
pub use filter::{filter_words, CandidateWords};
pub use word_source::{
    BuiltinWordList, WordListFile, WordSource, WordSourceRef,
};

pub use secrecy;
pub use zxcvbn;

/// Default general purpose RNG.
pub(crate) fn rng() -> impl rand::Rng {
    rand::thread_rng()
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Special characters used when none are configured.
pub const DEFAULT_SPECIAL_CHARACTERS: &[char] = &['!', '$', '*', '&'];
