//! Reduce a raw word list to the candidate words.
use crate::{Error, Result};
use rand::{seq::SliceRandom, Rng};

/// Words eligible for passphrase generation.
///
/// Every word consists solely of ASCII letters and its
/// length lies within the bounds used to create the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateWords {
    words: Vec<String>,
    min: usize,
    max: usize,
}

impl CandidateWords {
    /// Number of candidate words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Determine if there are no candidate words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Minimum word length used by the filter.
    pub fn min_word_length(&self) -> usize {
        self.min
    }

    /// Maximum word length used by the filter.
    pub fn max_word_length(&self) -> usize {
        self.max
    }

    /// Iterate the candidate words in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Choose a word uniformly at random.
    ///
    /// Returns `None` when the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// Determine if a word is eligible.
fn is_candidate(word: &str, min: usize, max: usize) -> bool {
    let length = word.chars().count();
    !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && (min..=max).contains(&length)
}

/// Filter raw words to those with only ASCII letters and a
/// length in the inclusive range `min..=max`.
///
/// Entries containing whitespace are rejected, the relative
/// order of the surviving words is preserved.
pub fn filter_words<I, S>(
    raw_words: I,
    min: usize,
    max: usize,
) -> Result<CandidateWords>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if min > max {
        return Err(Error::WordLength { min, max });
    }

    let words: Vec<String> = raw_words
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref();
            is_candidate(word, min, max).then(|| word.to_owned())
        })
        .collect();

    tracing::debug!(candidates = words.len(), min, max, "filter words");

    Ok(CandidateWords { words, min, max })
}
