//! Anagram group queries
//!
//! Groups are keyed by the case-insensitive sorted key. Ordering is always
//! size descending, then key ascending, which makes ties deterministic.

use crate::core::WordEntry;
use crate::corpus::CorpusStore;
use crate::error::{EngineError, Result};
use serde::Serialize;
use std::cmp::Ordering;

/// Smallest group size that still describes an anagram relationship
pub const MIN_GROUP_SIZE: usize = 2;

/// A set of mutually-anagram words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    /// Shared case-insensitive key (empty for the empty-corpus result)
    #[serde(skip)]
    pub key: String,
    pub count: usize,
    /// Member words in corpus order
    pub words: Vec<String>,
}

/// One page of [`groups_at_least_size`] results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPage {
    /// Number of groups matching the size filter across all pages
    pub count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub results: Vec<AnagramGroup>,
}

fn by_size_then_key(a: &(&str, usize), b: &(&str, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

fn collect_group(store: &CorpusStore, key: &str) -> AnagramGroup {
    let words: Vec<String> = store
        .group(key)
        .into_iter()
        .map(WordEntry::word)
        .map(str::to_string)
        .collect();

    AnagramGroup {
        key: key.to_string(),
        count: words.len(),
        words,
    }
}

/// Largest anagram group, ties going to the smallest key
///
/// An empty corpus yields a group with count 0 and no words.
///
/// # Examples
/// ```
/// use anagram_index::corpus::CorpusStore;
/// use anagram_index::query::biggest_group;
///
/// let mut store = CorpusStore::new();
/// store.add_words(&["stop", "pots", "tops", "listen", "silent"]).unwrap();
///
/// let group = biggest_group(&store);
/// assert_eq!(group.count, 3);
/// assert_eq!(group.words, vec!["stop", "pots", "tops"]);
/// ```
#[must_use]
pub fn biggest_group(store: &CorpusStore) -> AnagramGroup {
    store
        .group_sizes()
        .min_by(by_size_then_key)
        .map(|(key, _)| collect_group(store, key))
        .unwrap_or_default()
}

/// Page through every group with at least `min_group_size` members
///
/// Pages are 1-indexed. The first page always exists, even when nothing
/// matches; any later page past the last group is reported as not found.
///
/// # Errors
/// - `InvalidInput` if `min_group_size < 2`, `page == 0` or `page_size == 0`
/// - `NotFound` if `page` is beyond the last page
pub fn groups_at_least_size(
    store: &CorpusStore,
    min_group_size: usize,
    page: usize,
    page_size: usize,
) -> Result<GroupPage> {
    if min_group_size < MIN_GROUP_SIZE {
        return Err(EngineError::invalid(format!(
            "min group size must be at least {MIN_GROUP_SIZE}, got {min_group_size}"
        )));
    }
    if page == 0 {
        return Err(EngineError::invalid("page must be at least 1"));
    }
    if page_size == 0 {
        return Err(EngineError::invalid("page size must be at least 1"));
    }

    let mut matching: Vec<(&str, usize)> = store
        .group_sizes()
        .filter(|&(_, size)| size >= min_group_size)
        .collect();
    matching.sort_unstable_by(by_size_then_key);

    let count = matching.len();
    let total_pages = count.div_ceil(page_size).max(1);
    if page > total_pages {
        return Err(EngineError::NotFound(format!(
            "page {page} (last page is {total_pages})"
        )));
    }

    let results = matching
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|&(key, _)| collect_group(store, key))
        .collect();

    Ok(GroupPage {
        count,
        page,
        page_size,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
        results,
    })
}
