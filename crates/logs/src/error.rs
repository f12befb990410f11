use thiserror::Error;

/// Errors generated by the logs library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by the input/output library.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated parsing a log filter directive.
    #[error(transparent)]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Error generated when a global subscriber is already set.
    #[error(transparent)]
    Init(#[from] tracing_subscriber::util::TryInitError),
}
