//! Build passphrases from candidate words.
use crate::{
    filter_words, CandidateWords, Capitalization, Error, PassphraseConfig,
    Result, WordSource, DIGITS,
};
use rand::{seq::SliceRandom, Rng};
use secrecy::SecretString;

/// Generated passphrase.
#[derive(Debug)]
pub struct PassphraseResult {
    /// One-based position in the generated batch.
    pub index: usize,
    /// The generated passphrase.
    pub passphrase: SecretString,
}

/// Generator for a configuration and the candidate words
/// loaded from its word source.
#[derive(Debug, Clone)]
pub struct PassphraseGenerator {
    config: PassphraseConfig,
    candidates: CandidateWords,
}

impl PassphraseGenerator {
    /// Create a generator reading words from the configured source.
    pub fn new(config: PassphraseConfig) -> Result<Self> {
        let source = config.word_source().open();
        Self::from_source(config, source.as_ref())
    }

    /// Create a generator reading words from a source.
    pub fn from_source(
        config: PassphraseConfig,
        source: &dyn WordSource,
    ) -> Result<Self> {
        tracing::debug!(source = %source.describe(), "load word source");
        let lines = source.read_lines()?;
        let candidates = filter_words(
            &lines,
            config.min_word_length(),
            config.max_word_length(),
        )?;
        Ok(Self { config, candidates })
    }

    /// Configuration for this generator.
    pub fn config(&self) -> &PassphraseConfig {
        &self.config
    }

    /// Candidate words for this generator.
    pub fn candidates(&self) -> &CandidateWords {
        &self.candidates
    }

    /// Generate a single passphrase.
    pub fn one(&self) -> Result<SecretString> {
        self.one_with_rng(&mut crate::rng())
    }

    /// Generate a single passphrase using a random number generator.
    pub fn one_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<SecretString> {
        ensure_candidates(&self.candidates)?;
        Ok(passphrase(&self.config, &self.candidates, rng)?.into())
    }

    /// Generate the configured number of passphrases.
    pub fn many(&self) -> Result<Vec<PassphraseResult>> {
        self.many_with_rng(&mut crate::rng())
    }

    /// Generate the configured number of passphrases using
    /// a random number generator.
    pub fn many_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<PassphraseResult>> {
        generate(&self.config, &self.candidates, rng)
    }
}

/// Filter the raw words and generate passphrases using
/// the default random number generator.
pub fn generate_passphrases<I, S>(
    raw_words: I,
    config: &PassphraseConfig,
) -> Result<Vec<PassphraseResult>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rng = crate::rng();
    generate_passphrases_with_rng(raw_words, config, &mut rng)
}

/// Filter the raw words and generate passphrases.
pub fn generate_passphrases_with_rng<I, S, R>(
    raw_words: I,
    config: &PassphraseConfig,
    rng: &mut R,
) -> Result<Vec<PassphraseResult>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates = filter_words(
        raw_words,
        config.min_word_length(),
        config.max_word_length(),
    )?;
    generate(config, &candidates, rng)
}

/// Generate `config.count()` passphrases from the candidate words.
///
/// Fails without consuming randomness when there are no
/// candidate words.
pub fn generate<R: Rng + ?Sized>(
    config: &PassphraseConfig,
    candidates: &CandidateWords,
    rng: &mut R,
) -> Result<Vec<PassphraseResult>> {
    ensure_candidates(candidates)?;

    tracing::debug!(
        count = config.count(),
        words = config.words(),
        candidates = candidates.len(),
        "generate passphrases");

    (1..=config.count())
        .map(|index| {
            Ok(PassphraseResult {
                index,
                passphrase: passphrase(config, candidates, &mut *rng)?
                    .into(),
            })
        })
        .collect()
}

fn ensure_candidates(candidates: &CandidateWords) -> Result<()> {
    if candidates.is_empty() {
        return Err(no_eligible_words(candidates));
    }
    Ok(())
}

fn no_eligible_words(candidates: &CandidateWords) -> Error {
    Error::NoEligibleWords {
        min: candidates.min_word_length(),
        max: candidates.max_word_length(),
    }
}

/// Build one passphrase.
fn passphrase<R: Rng + ?Sized>(
    config: &PassphraseConfig,
    candidates: &CandidateWords,
    rng: &mut R,
) -> Result<String> {
    let separator = config.separator().as_str();

    // Draw with replacement, words may repeat
    let words = (0..config.words())
        .map(|_| {
            candidates
                .choose(&mut *rng)
                .map(|word| format_word(word, config.capitalization()))
                .ok_or_else(|| no_eligible_words(candidates))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut passphrase = words.join(separator);
    if config.capitalization() == Capitalization::FirstOnly {
        passphrase = capitalize(&passphrase);
    }
    passphrase.push_str(separator);

    for _ in 0..config.digits() {
        passphrase.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
    }

    if config.special_character() {
        let special = config
            .special_characters()
            .choose(rng)
            .ok_or(Error::EmptySpecialCharacters)?;
        passphrase.push(*special);
    }

    Ok(passphrase)
}

fn format_word(word: &str, capitalization: Capitalization) -> String {
    let word = word.to_ascii_lowercase();
    match capitalization {
        Capitalization::EachWord => capitalize(&word),
        Capitalization::FirstOnly => word,
    }
}

/// Upper case the first character.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized = String::with_capacity(value.len());
            capitalized.push(first.to_ascii_uppercase());
            capitalized.push_str(chars.as_str());
            capitalized
        }
        None => String::new(),
    }
}
