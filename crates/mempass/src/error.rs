use mempass_password::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {} is not a file", .0.display())]
    NotFile(PathBuf),

    #[error("unknown output format {0}, expected table or json")]
    UnknownOutputFormat(String),

    #[error(transparent)]
    Password(#[from] mempass_password::Error),

    #[error(transparent)]
    Logs(#[from] mempass_logs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Suggestion for the user to resolve the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Password(e) => match e.kind() {
                ErrorKind::NoEligibleWords => Some(
                    "widen the --min and --max word lengths or use a larger --word-list",
                ),
                ErrorKind::WordSourceUnavailable => {
                    Some("check the --word-list path is a readable text file")
                }
                ErrorKind::InvalidConfiguration => None,
            },
            _ => None,
        }
    }
}
