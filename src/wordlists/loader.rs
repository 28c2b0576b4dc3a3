//! Word list loading utilities
//!
//! Files hold one word per line. Blank lines and lines starting with `#` are
//! skipped; everything else is trimmed and kept as is, so validation happens
//! when the words reach the engine.

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use anagram_index::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/sample.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = parse_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Extract words from word-list text
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use anagram_index::wordlists::loader::words_from_slice;
/// use anagram_index::wordlists::SAMPLE;
///
/// let words = words_from_slice(SAMPLE);
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
