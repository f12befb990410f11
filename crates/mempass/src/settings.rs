//! Settings file loaded with `--config`.
use mempass_password::{Capitalization, Separator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Defaults for passphrase generation read from a TOML file.
///
/// Command line arguments take precedence over these values.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Number of passphrases.
    pub count: Option<usize>,
    /// Words in each passphrase.
    pub words: Option<usize>,
    /// Minimum word length.
    pub min: Option<usize>,
    /// Maximum word length.
    pub max: Option<usize>,
    /// Capitalization mode.
    pub capitalization: Option<Capitalization>,
    /// Word separator.
    pub separator: Option<Separator>,
    /// Length of the numeric suffix.
    pub digits: Option<usize>,
    /// Append a special character.
    pub special_character: Option<bool>,
    /// Candidate special characters.
    pub special_characters: Option<Vec<char>>,
    /// Word list file, relative paths are resolved
    /// from the directory of the settings file.
    pub word_list: Option<PathBuf>,

    /// Path the file was loaded from.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFile(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&contents)?;
        let path = path.canonicalize()?;

        if let (Some(word_list), Some(dir)) =
            (settings.word_list.as_mut(), path.parent())
        {
            if word_list.is_relative() {
                *word_list = dir.join(&*word_list);
            }
        }

        tracing::debug!(
            target: crate::TARGET,
            path = %path.display(),
            "loaded settings");

        settings.file = Some(path);
        Ok(settings)
    }

    /// Path the settings were loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}
