//! Main anagram engine interface

use crate::config::EngineConfig;
use crate::core::validate_word;
use crate::corpus::{AddSummary, CorpusStore, derive_entries};
use crate::error::{EngineError, Result};
use crate::query::{self, AnagramGroup, AnagramQuery, GroupPage};
use crate::stats::{self, LengthStatistics};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Anagram engine
///
/// Owns the corpus behind a single read/write lock. Mutations hold the write
/// lock for the whole call, reads hold the read lock, so every call sees a
/// consistent snapshot. Clones share the same corpus.
#[derive(Debug, Clone, Default)]
pub struct AnagramEngine {
    store: Arc<RwLock<CorpusStore>>,
    config: EngineConfig,
}

impl AnagramEngine {
    /// Create an engine with an empty corpus
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(CorpusStore::new())),
            config,
        }
    }

    /// Create an engine pre-loaded with `words`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any word breaks the configured bounds.
    ///
    /// # Examples
    /// ```
    /// use anagram_index::config::EngineConfig;
    /// use anagram_index::engine::AnagramEngine;
    /// use anagram_index::query::AnagramQuery;
    ///
    /// let engine = AnagramEngine::with_words(EngineConfig::default(), &["stop", "pots", "tops"]).unwrap();
    /// assert_eq!(engine.anagrams_for("spot", &AnagramQuery::new()), vec!["stop", "pots", "tops"]);
    /// ```
    pub fn with_words<S>(config: EngineConfig, words: &[S]) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let engine = Self::new(config);
        engine.add_words(words)?;
        Ok(engine)
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add words to the corpus
    ///
    /// The whole batch is validated before anything is inserted; exact
    /// duplicates of stored words are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any word is empty or too long. The corpus is
    /// unchanged in that case.
    pub fn add_words<S>(&self, words: &[S]) -> Result<AddSummary>
    where
        S: AsRef<str> + Sync,
    {
        for word in words {
            if let Err(err) = validate_word(word.as_ref(), self.config.max_word_length) {
                warn!(error = %err, "rejected word batch");
                return Err(err);
            }
        }

        // Key derivation runs before the write lock is taken
        let entries = derive_entries(words);
        Ok(self.store.write().insert_all(entries))
    }

    /// Remove every word, returning how many were stored
    pub fn delete_all(&self) -> usize {
        self.store.write().delete_all()
    }

    /// Remove one word by exact string
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exact word is not stored.
    pub fn delete_word(&self, word: &str) -> Result<()> {
        if self.store.write().delete_by_exact_word(word) {
            Ok(())
        } else {
            debug!(word, "delete of unknown word");
            Err(EngineError::word_not_found(word))
        }
    }

    /// Remove a word and all of its case-insensitive anagrams
    ///
    /// Returns the number of removed entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exact word is not stored; its anagrams are
    /// then left in place.
    pub fn delete_word_and_anagrams(&self, word: &str) -> Result<usize> {
        self.store
            .write()
            .delete_word_and_its_anagrams(word)
            .ok_or_else(|| EngineError::word_not_found(word))
    }

    /// Stored anagrams of `word`, see [`query::anagrams_for_word`]
    #[must_use]
    pub fn anagrams_for(&self, word: &str, options: &AnagramQuery) -> Vec<String> {
        query::anagrams_for_word(&self.store.read(), word, options)
    }

    #[must_use]
    pub fn length_statistics(&self) -> LengthStatistics {
        stats::length_statistics(&self.store.read())
    }

    #[must_use]
    pub fn biggest_group(&self) -> AnagramGroup {
        query::biggest_group(&self.store.read())
    }

    /// Paginated groups of at least `min_group_size` words
    ///
    /// `page_size` falls back to the configured default and is capped at the
    /// configured maximum.
    ///
    /// # Errors
    ///
    /// See [`query::groups_at_least_size`].
    pub fn groups_at_least(
        &self,
        min_group_size: usize,
        page: usize,
        page_size: Option<usize>,
    ) -> Result<GroupPage> {
        let page_size = self.config.page_size(page_size);
        query::groups_at_least_size(&self.store.read(), min_group_size, page, page_size)
    }

    /// Whether all `words` are mutual anagrams, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for fewer than two words.
    pub fn are_anagrams<S: AsRef<str>>(&self, words: &[S]) -> Result<bool> {
        query::are_anagrams(words)
    }

    /// Run several reads against one snapshot
    pub fn read<R>(&self, f: impl FnOnce(&CorpusStore) -> R) -> R {
        f(&self.store.read())
    }

    /// Stored words in corpus order
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.store
            .read()
            .all()
            .map(|entry| entry.word().to_string())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}
