//! Word length statistics
//!
//! Averages and medians are computed at full precision and only rounded when
//! the summary is built.

use crate::core::WordEntry;
use crate::corpus::CorpusStore;
use serde::Serialize;

/// Decimal digits kept for average and median
pub const STAT_DECIMALS: usize = 4;

/// Length distribution summary
///
/// Every field except `total_words` is `None` for an empty corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LengthStatistics {
    pub total_words: usize,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub average_length: Option<f64>,
    pub median_length: Option<f64>,
}

/// Summarise the lengths of every stored word
///
/// # Examples
/// ```
/// use anagram_index::corpus::CorpusStore;
/// use anagram_index::stats::length_statistics;
///
/// let mut store = CorpusStore::new();
/// store.add_words(&["first", "second"]).unwrap();
///
/// let stats = length_statistics(&store);
/// assert_eq!(stats.total_words, 2);
/// assert_eq!(stats.median_length, Some(5.5));
/// ```
#[must_use]
pub fn length_statistics(store: &CorpusStore) -> LengthStatistics {
    let mut lengths: Vec<usize> = store.all().map(WordEntry::length).collect();
    lengths.sort_unstable();
    summarize(&lengths)
}

/// Build the summary from lengths already sorted ascending
#[must_use]
pub fn summarize(sorted_lengths: &[usize]) -> LengthStatistics {
    LengthStatistics {
        total_words: sorted_lengths.len(),
        min_length: sorted_lengths.first().copied(),
        max_length: sorted_lengths.last().copied(),
        average_length: mean(sorted_lengths).map(round_stat),
        median_length: median(sorted_lengths).map(round_stat),
    }
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: usize = values.iter().sum();
    Some(total as f64 / values.len() as f64)
}

/// Exact median of values sorted ascending
///
/// Odd counts return the middle element; even counts the mean of the two
/// middle elements.
#[must_use]
pub fn median(sorted: &[usize]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    if len % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    }
}

/// Round to [`STAT_DECIMALS`] decimal digits
///
/// Goes through decimal formatting, so exact ties round half to even
/// (1.03125 becomes 1.0312).
#[must_use]
pub fn round_stat(value: f64) -> f64 {
    format!("{value:.precision$}", precision = STAT_DECIMALS)
        .parse()
        .unwrap_or(value)
}
