//! Dictionary loading utilities
//!
//! Provides functions to load a lexicon from a file or from the embedded list.

use super::DICTIONARY;
use crate::core::Lexicon;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read one word per line from a file
///
/// Blank lines and `#` comments are skipped; case is left to the lexicon.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into candidate words, one per line
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Build a lexicon from the `--dictionary` argument
///
/// `"all"` selects the embedded dictionary; anything else is a file path.
///
/// # Errors
///
/// Fails if the file cannot be read or contains no words.
pub fn load_lexicon(source: &str) -> Result<Lexicon> {
    let lexicon = if source == "all" {
        Lexicon::load(DICTIONARY)?
    } else {
        let words =
            load_from_file(source).with_context(|| format!("reading dictionary {source}"))?;
        Lexicon::load(words).with_context(|| format!("loading dictionary {source}"))?
    };

    tracing::info!(source, words = lexicon.len(), "dictionary ready");
    Ok(lexicon)
}
