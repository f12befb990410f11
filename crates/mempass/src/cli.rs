//! Command line interface.
use clap::Parser;
use mempass_password::{
    Capitalization, PassphraseConfig, PassphraseGenerator, Separator,
    WordSourceRef,
};
use std::path::PathBuf;

use crate::{
    render::{self, OutputFormat},
    settings::Settings,
    Result, TARGET,
};

/// Generate memorable passphrases from a word list.
///
/// Each passphrase is made from random words followed by
/// random digits and a special character, for example:
///
/// Otter Lantern Meadow 582&
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about)]
pub struct Mempass {
    /// Number of passphrases to generate [default: 1].
    #[clap(short = 'n', long)]
    pub count: Option<usize>,

    /// Number of words in each passphrase [default: 3].
    #[clap(short, long)]
    pub words: Option<usize>,

    /// Minimum word length [default: 5].
    #[clap(long)]
    pub min: Option<usize>,

    /// Maximum word length [default: 8].
    #[clap(long)]
    pub max: Option<usize>,

    /// Capitalize only the first letter of the passphrase.
    #[clap(short, long)]
    pub first_only: bool,

    /// Do not separate words with spaces.
    #[clap(long)]
    pub no_space: bool,

    /// Number of random digits [default: 3].
    #[clap(short, long)]
    pub digits: Option<usize>,

    /// Do not append a special character.
    #[clap(long)]
    pub no_special: bool,

    /// Special characters to choose from [default: !,$,*,&].
    #[clap(short, long, value_delimiter = ',')]
    pub special_chars: Option<Vec<char>>,

    /// Word list file with one word per line.
    #[clap(short = 'l', long, env = "MEMPASS_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Settings file.
    #[clap(short, long, env = "MEMPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: table or json.
    #[clap(long, default_value = "table")]
    pub format: OutputFormat,

    /// Include a strength estimate for each passphrase.
    #[clap(long)]
    pub strength: bool,

    /// Print debug information.
    #[clap(short, long)]
    pub verbose: bool,

    /// Also write logs to files in this directory.
    #[clap(long, env = "MEMPASS_LOG_DIR", hide = true)]
    pub log_dir: Option<PathBuf>,
}

impl Mempass {
    /// Passphrase configuration from the arguments falling
    /// back to the settings and then the defaults.
    pub fn passphrase_config(
        &self,
        settings: &Settings,
    ) -> Result<PassphraseConfig> {
        let mut builder = PassphraseConfig::builder();

        if let Some(count) = self.count.or(settings.count) {
            builder = builder.count(count);
        }
        if let Some(words) = self.words.or(settings.words) {
            builder = builder.words(words);
        }
        if let Some(min) = self.min.or(settings.min) {
            builder = builder.min_word_length(min);
        }
        if let Some(max) = self.max.or(settings.max) {
            builder = builder.max_word_length(max);
        }
        if let Some(digits) = self.digits.or(settings.digits) {
            builder = builder.digits(digits);
        }

        let capitalization = if self.first_only {
            Capitalization::FirstOnly
        } else {
            settings.capitalization.unwrap_or_default()
        };
        let separator = if self.no_space {
            Separator::None
        } else {
            settings.separator.unwrap_or_default()
        };
        let special_character =
            !self.no_special && settings.special_character.unwrap_or(true);

        if let Some(characters) = self
            .special_chars
            .as_ref()
            .or(settings.special_characters.as_ref())
        {
            builder = builder.special_characters(characters.clone());
        }

        let word_source = self
            .word_list
            .as_ref()
            .or(settings.word_list.as_ref())
            .map(|path| WordSourceRef::File(path.clone()))
            .unwrap_or_default();

        Ok(builder
            .capitalization(capitalization)
            .separator(separator)
            .special_character(special_character)
            .word_source(word_source)
            .build()?)
    }
}

/// Generate and print passphrases.
pub fn run(args: Mempass) -> Result<()> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let config = args.passphrase_config(&settings)?;
    tracing::debug!(
        target: TARGET,
        settings = ?settings.file(),
        config = ?config,
        "configuration");

    let generator = PassphraseGenerator::new(config)?;
    tracing::debug!(
        target: TARGET,
        candidates = generator.candidates().len(),
        "candidate words");

    let results = generator.many()?;
    let rows = render::rows(&results, args.strength);
    println!("{}", render::render(&rows, args.format)?);
    Ok(())
}
