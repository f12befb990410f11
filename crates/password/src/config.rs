//! Passphrase configuration.
use crate::{Error, Result, WordSourceRef, DEFAULT_SPECIAL_CHARACTERS};
use serde::{Deserialize, Serialize};

/// How words are capitalized.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capitalization {
    /// Upper case the first letter of every word.
    #[default]
    EachWord,
    /// Upper case only the first letter of the passphrase.
    FirstOnly,
}

/// Separator between words and before the numeric suffix.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    /// Single space.
    #[default]
    Space,
    /// Words are concatenated.
    None,
}

impl Separator {
    /// Separator as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::None => "",
        }
    }
}

/// Validated options for passphrase generation.
///
/// Use [PassphraseConfig::builder] to create a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    count: usize,
    words: usize,
    min_word_length: usize,
    max_word_length: usize,
    capitalization: Capitalization,
    separator: Separator,
    digits: usize,
    special_character: bool,
    special_characters: Vec<char>,
    word_source: WordSourceRef,
}

impl PassphraseConfig {
    /// Builder with the default options.
    pub fn builder() -> PassphraseConfigBuilder {
        PassphraseConfigBuilder::default()
    }

    /// Number of passphrases to generate.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of words in each passphrase.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Minimum word length (inclusive).
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Maximum word length (inclusive).
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Capitalization mode.
    pub fn capitalization(&self) -> Capitalization {
        self.capitalization
    }

    /// Word separator mode.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Length of the numeric suffix.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Whether a trailing special character is appended.
    pub fn special_character(&self) -> bool {
        self.special_character
    }

    /// Candidate special characters.
    pub fn special_characters(&self) -> &[char] {
        &self.special_characters
    }

    /// Source of the raw word list.
    pub fn word_source(&self) -> &WordSourceRef {
        &self.word_source
    }
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            count: 1,
            words: 3,
            min_word_length: 5,
            max_word_length: 8,
            capitalization: Default::default(),
            separator: Default::default(),
            digits: 3,
            special_character: true,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_vec(),
            word_source: Default::default(),
        }
    }
}

/// Builder for a [PassphraseConfig].
#[derive(Debug, Clone, Default)]
pub struct PassphraseConfigBuilder {
    config: PassphraseConfig,
}

impl PassphraseConfigBuilder {
    /// Number of passphrases to generate.
    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Number of words in each passphrase.
    pub fn words(mut self, words: usize) -> Self {
        self.config.words = words;
        self
    }

    /// Minimum word length.
    pub fn min_word_length(mut self, length: usize) -> Self {
        self.config.min_word_length = length;
        self
    }

    /// Maximum word length.
    pub fn max_word_length(mut self, length: usize) -> Self {
        self.config.max_word_length = length;
        self
    }

    /// Capitalization mode.
    pub fn capitalization(mut self, capitalization: Capitalization) -> Self {
        self.config.capitalization = capitalization;
        self
    }

    /// Word separator mode.
    pub fn separator(mut self, separator: Separator) -> Self {
        self.config.separator = separator;
        self
    }

    /// Length of the numeric suffix, zero disables the suffix.
    pub fn digits(mut self, digits: usize) -> Self {
        self.config.digits = digits;
        self
    }

    /// Append a trailing special character.
    pub fn special_character(mut self, enabled: bool) -> Self {
        self.config.special_character = enabled;
        self
    }

    /// Candidate special characters.
    pub fn special_characters(mut self, characters: Vec<char>) -> Self {
        self.config.special_characters = characters;
        self
    }

    /// Source of the raw word list.
    pub fn word_source(mut self, source: WordSourceRef) -> Self {
        self.config.word_source = source;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<PassphraseConfig> {
        let config = self.config;
        if config.count == 0 {
            return Err(Error::ZeroCount("passphrase count"));
        }
        if config.words == 0 {
            return Err(Error::ZeroCount("words per passphrase"));
        }
        if config.min_word_length > config.max_word_length {
            return Err(Error::WordLength {
                min: config.min_word_length,
                max: config.max_word_length,
            });
        }
        if config.special_character && config.special_characters.is_empty()
        {
            return Err(Error::EmptySpecialCharacters);
        }
        Ok(config)
    }
}
