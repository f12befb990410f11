//! Render generated passphrases.
use mempass_password::{strength::measure_entropy, PassphraseResult};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::{fmt, str::FromStr};
use unicode_width::UnicodeWidthStr;

use crate::{Error, Result};

/// Formats for printing passphrases.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table.
    #[default]
    Table,
    /// JSON array.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Table => "table",
                Self::Json => "json",
            }
        )
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownOutputFormat(s.to_owned())),
        }
    }
}

/// Row of output for a generated passphrase.
#[derive(Debug, Serialize)]
pub struct Row<'a> {
    /// One-based index.
    pub index: usize,
    /// Passphrase text.
    pub passphrase: &'a str,
    /// Strength score between zero and four.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Estimated guesses as a base 10 logarithm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guesses_log10: Option<f64>,
}

/// Create output rows, optionally with strength estimates.
pub fn rows(results: &[PassphraseResult], strength: bool) -> Vec<Row<'_>> {
    results
        .iter()
        .map(|result| {
            let (score, guesses_log10) = if strength {
                let entropy = measure_entropy(&result.passphrase);
                (Some(entropy.score().into()), Some(entropy.guesses_log10()))
            } else {
                (None, None)
            };
            Row {
                index: result.index,
                passphrase: result.passphrase.expose_secret(),
                score,
                guesses_log10,
            }
        })
        .collect()
}

/// Render rows in an output format.
pub fn render(rows: &[Row<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Render rows as a table with a header.
fn table(rows: &[Row<'_>]) -> String {
    let with_score = rows.iter().any(|row| row.score.is_some());
    let index_width = rows
        .iter()
        .map(|row| row.index.to_string().len())
        .max()
        .unwrap_or(0)
        .max(1);
    let passphrase_width = rows
        .iter()
        .map(|row| row.passphrase.width())
        .max()
        .unwrap_or(0)
        .max("Passphrase".len());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let mut header = vec![
        format!("{:>index_width$}", "#"),
        pad("Passphrase", passphrase_width),
    ];
    let mut rule = vec!["-".repeat(index_width), "-".repeat(passphrase_width)];
    if with_score {
        header.push("Score".to_owned());
        rule.push("-".repeat("Score".len()));
    }
    lines.push(header.join("  ").trim_end().to_owned());
    lines.push(rule.join("  "));

    for row in rows {
        let mut columns = vec![
            format!("{:>index_width$}", row.index),
            pad(row.passphrase, passphrase_width),
        ];
        if let Some(score) = row.score {
            columns.push(score.to_string());
        }
        lines.push(columns.join("  ").trim_end().to_owned());
    }

    lines.join("\n")
}

/// Pad by display width, `format!` pads by character count.
fn pad(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(padding))
}
