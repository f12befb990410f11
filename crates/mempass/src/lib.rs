//! Generate memorable passphrases from a word list.

/// Target for tracing macros.
///
/// Used so that log messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "mempass";

pub mod cli;
mod error;
pub mod render;
pub mod settings;

pub use error::Error;
pub type Result<T> = std::result::Result<T, error::Error>;
