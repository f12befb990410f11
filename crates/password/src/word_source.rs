//! Sources of raw words.
use crate::{Error, Result};
use std::path::PathBuf;

/// Word list compiled into the library.
static BUILTIN_WORDS: &str = include_str!("wordlists/english.txt");

/// Source of raw candidate words, one word per line.
pub trait WordSource {
    /// Read the raw lines of the source.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human readable name of the source.
    fn describe(&self) -> String;
}

/// Reference to a word source held by a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSourceRef {
    /// Word list bundled with the library.
    #[default]
    Builtin,
    /// Plain text file with one word per line.
    File(PathBuf),
}

impl WordSourceRef {
    /// Open the referenced word source.
    pub fn open(&self) -> Box<dyn WordSource> {
        match self {
            Self::Builtin => Box::new(BuiltinWordList),
            Self::File(path) => Box::new(WordListFile::new(path.clone())),
        }
    }
}

impl From<PathBuf> for WordSourceRef {
    fn from(value: PathBuf) -> Self {
        Self::File(value)
    }
}

/// Word list bundled with the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWordList;

impl WordSource for BuiltinWordList {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(BUILTIN_WORDS.lines().map(String::from).collect())
    }

    fn describe(&self) -> String {
        "builtin".to_owned()
    }
}

/// Word list read from a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    /// Create a word list for a file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the word list file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl WordSource for WordListFile {
    fn read_lines(&self) -> Result<Vec<String>> {
        let contents =
            std::fs::read_to_string(self.path()).map_err(|source| {
                Error::WordSourceUnavailable {
                    path: self.path().clone(),
                    source,
                }
            })?;

        let lines: Vec<String> =
            contents.lines().map(String::from).collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(Error::EmptyWordSource(self.path.clone()));
        }

        tracing::debug!(
            path = %self.path.display(),
            lines = lines.len(),
            "read word list");

        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

impl<S: AsRef<str>> WordSource for Vec<S> {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|s| s.as_ref().to_owned()).collect())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}
