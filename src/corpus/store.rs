//! In-memory corpus store
//!
//! Entries live in insertion order keyed by a sequence number. Three indexes
//! point into them: exact word, case-insensitive key and case-sensitive key.
//! Group member lists are kept sorted by sequence, so corpus order falls out
//! of every lookup without re-sorting.

use crate::core::{MAX_WORD_LENGTH, WordEntry, derive_keys, validate_word};
use crate::error::Result;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outcome of a bulk insert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AddSummary {
    /// Entries created
    pub added: usize,
    /// Words skipped because the exact string was already stored
    pub skipped: usize,
}

/// Owns every `WordEntry` of the corpus
#[derive(Debug, Default)]
pub struct CorpusStore {
    entries: BTreeMap<u64, WordEntry>,
    by_word: FxHashMap<String, u64>,
    by_lowercase_key: FxHashMap<String, Vec<u64>>,
    by_sorted_key: FxHashMap<String, Vec<u64>>,
    next_sequence: u64,
}

/// Derive entries for a batch of words in parallel
///
/// No validation happens here; callers enforce the length bound first.
pub(crate) fn derive_entries<S>(words: &[S]) -> Vec<WordEntry>
where
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(|word| {
            let word = word.as_ref();
            WordEntry::from_derived(word.to_string(), derive_keys(word))
        })
        .collect()
}

impl CorpusStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words, skipping any exact string already stored
    ///
    /// Duplicates within the batch collapse to their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any word is empty or longer than
    /// `MAX_WORD_LENGTH`. Nothing is inserted in that case.
    ///
    /// # Examples
    /// ```
    /// use anagram_index::corpus::CorpusStore;
    ///
    /// let mut store = CorpusStore::new();
    /// let summary = store.add_words(&["foo", "oof", "foo"]).unwrap();
    /// assert_eq!(summary.added, 2);
    /// assert_eq!(summary.skipped, 1);
    /// ```
    pub fn add_words<S>(&mut self, words: &[S]) -> Result<AddSummary>
    where
        S: AsRef<str> + Sync,
    {
        for word in words {
            validate_word(word.as_ref(), MAX_WORD_LENGTH)?;
        }
        Ok(self.insert_all(derive_entries(words)))
    }

    /// Insert pre-derived entries in order
    pub fn insert_all(&mut self, entries: Vec<WordEntry>) -> AddSummary {
        let mut summary = AddSummary::default();

        for entry in entries {
            if self.insert(entry) {
                summary.added += 1;
            } else {
                summary.skipped += 1;
            }
        }

        debug!(
            added = summary.added,
            skipped = summary.skipped,
            total = self.len(),
            "inserted word batch"
        );
        summary
    }

    /// Insert a single entry ("get or create" on the exact word)
    ///
    /// Returns `false` when an entry with the same exact word already exists;
    /// the stored entry is left untouched.
    pub fn insert(&mut self, entry: WordEntry) -> bool {
        if self.by_word.contains_key(entry.word()) {
            return false;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.by_word.insert(entry.word().to_string(), sequence);
        self.by_lowercase_key
            .entry(entry.sorted_key_lowercase().to_string())
            .or_default()
            .push(sequence);
        self.by_sorted_key
            .entry(entry.sorted_key().to_string())
            .or_default()
            .push(sequence);
        self.entries.insert(sequence, entry);

        true
    }

    /// Remove every entry, returning how many were stored
    ///
    /// Sequence numbers keep counting so later inserts still sort after
    /// anything a caller may have cached.
    pub fn delete_all(&mut self) -> usize {
        let removed = self.entries.len();

        self.entries.clear();
        self.by_word.clear();
        self.by_lowercase_key.clear();
        self.by_sorted_key.clear();

        info!(removed, "deleted all words");
        removed
    }

    /// Remove the entry whose word is exactly `word`
    ///
    /// Returns `false` when no such entry exists.
    pub fn delete_by_exact_word(&mut self, word: &str) -> bool {
        let Some(sequence) = self.by_word.get(word).copied() else {
            return false;
        };

        self.remove_sequence(sequence);
        info!(word, "deleted word");
        true
    }

    /// Remove `word` and every entry sharing its case-insensitive key
    ///
    /// Returns the number of removed entries, or `None` when `word` itself is
    /// not stored. Nothing is removed in that case.
    pub fn delete_word_and_its_anagrams(&mut self, word: &str) -> Option<usize> {
        let entry = self.get(word)?;
        let key = entry.sorted_key_lowercase().to_string();

        let sequences = self.by_lowercase_key.get(&key).cloned().unwrap_or_default();
        for &sequence in &sequences {
            self.remove_sequence(sequence);
        }

        info!(word, key = %key, removed = sequences.len(), "deleted anagram group");
        Some(sequences.len())
    }

    fn remove_sequence(&mut self, sequence: u64) {
        let Some(entry) = self.entries.remove(&sequence) else {
            return;
        };

        self.by_word.remove(entry.word());
        remove_from_index(
            &mut self.by_lowercase_key,
            entry.sorted_key_lowercase(),
            sequence,
        );
        remove_from_index(&mut self.by_sorted_key, entry.sorted_key(), sequence);
    }

    /// All entries in insertion order
    pub fn all(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Look up the entry for an exact word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.by_word
            .get(word)
            .and_then(|sequence| self.entries.get(sequence))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members of the case-insensitive group `key`, in corpus order
    ///
    /// Returns an empty vector if no word has that key.
    #[must_use]
    pub fn group(&self, key: &str) -> Vec<&WordEntry> {
        self.members(&self.by_lowercase_key, key)
    }

    /// Members of the case-sensitive group `key`, in corpus order
    #[must_use]
    pub fn case_sensitive_group(&self, key: &str) -> Vec<&WordEntry> {
        self.members(&self.by_sorted_key, key)
    }

    /// Every case-insensitive key with its group size, in no particular order
    pub fn group_sizes(&self) -> impl Iterator<Item = (&str, usize)> {
        self.by_lowercase_key
            .iter()
            .map(|(key, members)| (key.as_str(), members.len()))
    }

    fn members(&self, index: &FxHashMap<String, Vec<u64>>, key: &str) -> Vec<&WordEntry> {
        index.get(key).map_or_else(Vec::new, |sequences| {
            sequences
                .iter()
                .filter_map(|sequence| self.entries.get(sequence))
                .collect()
        })
    }
}

fn remove_from_index(index: &mut FxHashMap<String, Vec<u64>>, key: &str, sequence: u64) {
    if let Some(members) = index.get_mut(key) {
        members.retain(|&member| member != sequence);
        if members.is_empty() {
            index.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(store: &CorpusStore) -> Vec<&str> {
        store.all().map(WordEntry::word).collect()
    }

    fn group_words<'a>(entries: &[&'a WordEntry]) -> Vec<&'a str> {
        entries.iter().map(|entry| entry.word()).collect()
    }

    #[test]
    fn add_words_preserves_insertion_order() {
        let mut store = CorpusStore::new();
        store.add_words(&["foo", "bar", "baz"]).unwrap();

        assert_eq!(words(&store), vec!["foo", "bar", "baz"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn add_words_is_idempotent_per_exact_string() {
        let mut store = CorpusStore::new();
        store.add_words(&["foo"]).unwrap();
        let summary = store.add_words(&["foo"]).unwrap();

        assert_eq!(summary, AddSummary { added: 0, skipped: 1 });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn case_variants_are_distinct_entries() {
        let mut store = CorpusStore::new();
        let summary = store.add_words(&["Foo", "foo", "FOO"]).unwrap();

        assert_eq!(summary.added, 3);
        assert_eq!(group_words(&store.group("foo")), vec!["Foo", "foo", "FOO"]);
        assert_eq!(group_words(&store.case_sensitive_group("foo")), vec!["foo"]);
    }

    #[test]
    fn duplicate_does_not_move_existing_entry() {
        let mut store = CorpusStore::new();
        store.add_words(&["foo", "bar"]).unwrap();
        store.add_words(&["foo", "baz"]).unwrap();

        assert_eq!(words(&store), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn delete_by_exact_word() {
        let mut store = CorpusStore::new();
        store.add_words(&["foo", "oof", "Foo"]).unwrap();

        assert!(store.delete_by_exact_word("oof"));
        assert!(!store.delete_by_exact_word("oof"));
        assert!(!store.delete_by_exact_word("FOO"));

        assert_eq!(words(&store), vec!["foo", "Foo"]);
        assert_eq!(group_words(&store.group("foo")), vec!["foo", "Foo"]);
    }

    #[test]
    fn delete_word_and_its_anagrams_removes_exactly_the_group() {
        let mut store = CorpusStore::new();
        store.add_words(&["foo", "bar", "Oof", "ofo", "rab"]).unwrap();

        assert_eq!(store.delete_word_and_its_anagrams("ofo"), Some(3));
        assert_eq!(words(&store), vec!["bar", "rab"]);
        assert!(store.group("foo").is_empty());
    }

    #[test]
    fn delete_group_for_missing_word_changes_nothing() {
        let mut store = CorpusStore::new();
        store.add_words(&["foo", "ofo"]).unwrap();

        // "oof" shares the key but is not itself stored
        assert_eq!(store.delete_word_and_its_anagrams("oof"), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_all_then_reinsert_keeps_order() {
        let mut store = CorpusStore::new();
        store.add_words(&["a", "b"]).unwrap();

        assert_eq!(store.delete_all(), 2);
        assert!(store.is_empty());
        assert_eq!(store.group_sizes().count(), 0);

        store.add_words(&["c", "a"]).unwrap();
        assert_eq!(words(&store), vec!["c", "a"]);
    }

    #[test]
    fn order_survives_delete_and_readd() {
        let mut store = CorpusStore::new();
        store.add_words(&["ab", "ba", "cd"]).unwrap();
        store.delete_by_exact_word("ab");
        store.add_words(&["ab"]).unwrap();

        assert_eq!(words(&store), vec!["ba", "cd", "ab"]);
        assert_eq!(group_words(&store.group("ab")), vec!["ba", "ab"]);
    }

    #[test]
    fn group_sizes_track_membership() {
        let mut store = CorpusStore::new();
        store.add_words(&["ab", "ba", "cd"]).unwrap();

        let mut sizes: Vec<(&str, usize)> = store.group_sizes().collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![("ab", 2), ("cd", 1)]);
    }

    #[test]
    fn get_and_contains() {
        let mut store = CorpusStore::new();
        store.add_words(&["Listen"]).unwrap();

        assert!(store.contains("Listen"));
        assert!(!store.contains("listen"));
        let entry = store.get("Listen").unwrap();
        assert!(entry.is_proper_noun());
        assert_eq!(entry.length(), 6);
    }

    #[test]
    fn add_words_rejects_invalid_batch() {
        let mut store = CorpusStore::new();
        let too_long = "a".repeat(MAX_WORD_LENGTH + 1);

        let err = store.add_words(&["stop", ""]).unwrap_err();
        assert!(err.is_invalid_input());
        let err = store.add_words(&["stop", too_long.as_str()]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(store.is_empty());

        let longest = "a".repeat(MAX_WORD_LENGTH);
        assert_eq!(store.add_words(&[longest]).unwrap().added, 1);
    }

    #[test]
    fn derive_entries_keeps_input_order() {
        let entries = derive_entries(&["b", "a", "c"]);
        let words: Vec<&str> = entries.iter().map(WordEntry::word).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }
}
