use anyhow::Result;
use mempass_password::{
    filter_words, generate, generate_passphrases_with_rng, BuiltinWordList,
    Capitalization, Error, ErrorKind, PassphraseConfig, Separator,
    WordSource,
};
use mempass_unit_tests::{word_block, NoRandom, FRUIT};
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use secrecy::ExposeSecret;

fn builtin() -> Result<Vec<String>> {
    Ok(BuiltinWordList.read_lines()?)
}

#[test]
fn passgen_count_and_indices() -> Result<()> {
    let words = builtin()?;
    let mut rng = StdRng::seed_from_u64(1);
    for count in [1, 2, 7, 25] {
        let config = PassphraseConfig::builder().count(count).build()?;
        let results = generate_passphrases_with_rng(&words, &config, &mut rng)?;
        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!((1..=count).collect::<Vec<_>>(), indices);
    }
    Ok(())
}

#[test]
fn passgen_word_segments() -> Result<()> {
    let words = builtin()?;
    let mut rng = StdRng::seed_from_u64(2);
    for (min, max) in [(3, 4), (5, 8), (6, 6), (7, 10)] {
        let config = PassphraseConfig::builder()
            .count(20)
            .words(4)
            .min_word_length(min)
            .max_word_length(max)
            .build()?;
        for result in generate_passphrases_with_rng(&words, &config, &mut rng)?
        {
            let passphrase = result.passphrase.expose_secret();
            let segments: Vec<&str> = word_block(passphrase).split(' ').collect();
            assert_eq!(4, segments.len());
            for segment in segments {
                assert!((min..=max).contains(&segment.len()), "{segment}");
                assert!(segment.chars().all(|c| c.is_ascii_alphabetic()));
            }
        }
    }
    Ok(())
}

#[test]
fn passgen_capitalize_each_word() -> Result<()> {
    let words = builtin()?;
    let config = PassphraseConfig::builder().count(20).words(5).build()?;
    let mut rng = StdRng::seed_from_u64(3);
    for result in generate_passphrases_with_rng(&words, &config, &mut rng)? {
        let passphrase = result.passphrase.expose_secret();
        for segment in word_block(passphrase).split(' ') {
            let mut chars = segment.chars();
            assert!(chars.next().unwrap().is_ascii_uppercase());
            assert!(chars.all(|c| c.is_ascii_lowercase()));
        }
    }
    Ok(())
}

#[test]
fn passgen_capitalize_first_only() -> Result<()> {
    let words = builtin()?;
    let config = PassphraseConfig::builder()
        .count(20)
        .words(4)
        .capitalization(Capitalization::FirstOnly)
        .build()?;
    let mut rng = StdRng::seed_from_u64(4);
    for result in generate_passphrases_with_rng(&words, &config, &mut rng)? {
        let passphrase = result.passphrase.expose_secret();
        let block = word_block(passphrase);
        let mut chars = block.chars();
        assert!(chars.next().unwrap().is_ascii_uppercase());
        assert!(chars.all(|c| c == ' ' || c.is_ascii_lowercase()));
    }
    Ok(())
}

#[test]
fn passgen_space_separator() -> Result<()> {
    let words = builtin()?;
    let mut rng = StdRng::seed_from_u64(5);
    for count in 1..=6 {
        let config = PassphraseConfig::builder()
            .count(5)
            .words(count)
            .build()?;
        for result in generate_passphrases_with_rng(&words, &config, &mut rng)?
        {
            let passphrase = result.passphrase.expose_secret();
            // One between each pair of words and one before the digits
            assert_eq!(count, passphrase.matches(' ').count());
        }
    }
    Ok(())
}

#[test]
fn passgen_no_space_separator() -> Result<()> {
    let words = builtin()?;
    let config = PassphraseConfig::builder()
        .count(20)
        .separator(Separator::None)
        .build()?;
    let mut rng = StdRng::seed_from_u64(6);
    for result in generate_passphrases_with_rng(&words, &config, &mut rng)? {
        assert!(!result.passphrase.expose_secret().contains(' '));
    }
    Ok(())
}

#[test]
fn passgen_numeric_suffix() -> Result<()> {
    let words = builtin()?;
    let mut rng = StdRng::seed_from_u64(7);
    for digits in [0, 1, 3, 8] {
        let config = PassphraseConfig::builder()
            .count(10)
            .digits(digits)
            .build()?;
        for result in generate_passphrases_with_rng(&words, &config, &mut rng)?
        {
            let passphrase = result.passphrase.expose_secret();
            let suffix = &passphrase[word_block(passphrase).len() + 1..];
            // Digits followed by one special character
            assert_eq!(digits + 1, suffix.len());
            assert!(suffix[..digits].chars().all(|c| c.is_ascii_digit()));
        }
    }
    Ok(())
}

#[test]
fn passgen_special_character() -> Result<()> {
    let words = builtin()?;
    let special = vec!['#', '@'];
    let config = PassphraseConfig::builder()
        .count(20)
        .special_characters(special.clone())
        .build()?;
    let mut rng = StdRng::seed_from_u64(8);
    for result in generate_passphrases_with_rng(&words, &config, &mut rng)? {
        let last = result.passphrase.expose_secret().chars().last().unwrap();
        assert!(special.contains(&last));
    }
    Ok(())
}

#[test]
fn passgen_special_character_disabled() -> Result<()> {
    let words = builtin()?;
    let config = PassphraseConfig::builder()
        .count(20)
        .special_character(false)
        .build()?;
    let mut rng = StdRng::seed_from_u64(9);
    for result in generate_passphrases_with_rng(&words, &config, &mut rng)? {
        let last = result.passphrase.expose_secret().chars().last().unwrap();
        assert!(last.is_ascii_digit());
    }

    let config = PassphraseConfig::builder()
        .count(20)
        .separator(Separator::None)
        .digits(0)
        .special_character(false)
        .build()?;
    for result in generate_passphrases_with_rng(&words, &config, &mut rng)? {
        let last = result.passphrase.expose_secret().chars().last().unwrap();
        assert!(last.is_ascii_lowercase());
    }
    Ok(())
}

#[test]
fn passgen_with_replacement() -> Result<()> {
    let config = PassphraseConfig::builder()
        .count(3)
        .words(3)
        .digits(1)
        .special_characters(vec!['!'])
        .build()?;
    let mut rng = StdRng::seed_from_u64(10);
    let results = generate_passphrases_with_rng(["apple"], &config, &mut rng)?;
    assert_eq!(3, results.len());
    for result in results {
        let passphrase = result.passphrase.expose_secret();
        assert!(passphrase.starts_with("Apple Apple Apple "));
    }
    Ok(())
}

#[test]
fn passgen_invalid_bounds_no_randomness() {
    let mut rng = NoRandom;
    let result = PassphraseConfig::builder()
        .min_word_length(9)
        .max_word_length(4)
        .build()
        .and_then(|config| {
            generate_passphrases_with_rng(FRUIT, &config, &mut rng)
        });
    let err = result.unwrap_err();
    assert!(matches!(err, Error::WordLength { min: 9, max: 4 }));
    assert_eq!(ErrorKind::InvalidConfiguration, err.kind());

    let err = filter_words(FRUIT, 9, 4).unwrap_err();
    assert_eq!(ErrorKind::InvalidConfiguration, err.kind());
}

#[test]
fn passgen_no_eligible_words() -> Result<()> {
    let words = builtin()?;
    let config = PassphraseConfig::builder()
        .min_word_length(20)
        .max_word_length(25)
        .build()?;
    let candidates = filter_words(&words, 20, 25)?;
    assert!(candidates.is_empty());

    let err = generate(&config, &candidates, &mut NoRandom).unwrap_err();
    assert!(matches!(err, Error::NoEligibleWords { min: 20, max: 25 }));
    assert_eq!(ErrorKind::NoEligibleWords, err.kind());

    let err = generate_passphrases_with_rng(&words, &config, &mut NoRandom)
        .unwrap_err();
    assert_eq!(ErrorKind::NoEligibleWords, err.kind());
    Ok(())
}

#[test]
fn passgen_two_words_two_digits() -> Result<()> {
    let config = PassphraseConfig::builder()
        .count(2)
        .words(2)
        .min_word_length(5)
        .max_word_length(5)
        .digits(2)
        .special_characters(vec!['!'])
        .build()?;
    let pattern = Regex::new(r"^[A-Z][a-z]{4} [A-Z][a-z]{4} \d{2}!$")?;
    let mut rng = StdRng::seed_from_u64(11);
    let results = generate_passphrases_with_rng(FRUIT, &config, &mut rng)?;
    assert_eq!(2, results.len());
    assert_eq!(1, results[0].index);
    assert_eq!(2, results[1].index);
    for result in results {
        let passphrase = result.passphrase.expose_secret();
        assert!(pattern.is_match(passphrase), "{passphrase}");
    }
    Ok(())
}

#[test]
fn passgen_words_only() -> Result<()> {
    let words = builtin()?;
    let config = PassphraseConfig::builder()
        .words(3)
        .separator(Separator::None)
        .digits(0)
        .special_character(false)
        .build()?;
    let pattern = Regex::new(r"^[A-Z][a-z]+([A-Z][a-z]+){2}$")?;
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..20 {
        let results = generate_passphrases_with_rng(&words, &config, &mut rng)?;
        assert_eq!(1, results.len());
        let passphrase = results[0].passphrase.expose_secret();
        assert!(pattern.is_match(passphrase), "{passphrase}");
    }
    Ok(())
}
