//! Anagram lookup for a single word

use crate::core::{WordEntry, sorted_key, sorted_key_lowercase};
use crate::corpus::CorpusStore;

/// Options for [`anagrams_for_word`]
///
/// The default matches case-insensitively, keeps proper nouns and returns
/// every match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnagramQuery {
    /// Keep at most this many matches; `Some(0)` yields nothing
    pub limit: Option<usize>,
    /// Drop title-cased words such as "Elvis"
    pub exclude_proper_nouns: bool,
    /// Match on the case-preserving key, so "Zab" no longer matches "zab"
    pub case_sensitive: bool,
}

impl AnagramQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            exclude_proper_nouns: false,
            case_sensitive: false,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn excluding_proper_nouns(mut self, exclude: bool) -> Self {
        self.exclude_proper_nouns = exclude;
        self
    }

    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Find the stored anagrams of `word`
///
/// The query word itself is excluded by exact string, so with both "Foo" and
/// "foo" stored, asking for "foo" returns "Foo". Proper-noun filtering runs
/// before the limit, and results keep corpus order.
///
/// # Examples
/// ```
/// use anagram_index::corpus::CorpusStore;
/// use anagram_index::query::{AnagramQuery, anagrams_for_word};
///
/// let mut store = CorpusStore::new();
/// store.add_words(&["listen", "Silent", "enlist", "google"]).unwrap();
///
/// let all = anagrams_for_word(&store, "listen", &AnagramQuery::new());
/// assert_eq!(all, vec!["Silent", "enlist"]);
///
/// let common = AnagramQuery::new().excluding_proper_nouns(true);
/// assert_eq!(anagrams_for_word(&store, "listen", &common), vec!["enlist"]);
/// ```
#[must_use]
pub fn anagrams_for_word(store: &CorpusStore, word: &str, query: &AnagramQuery) -> Vec<String> {
    let members = if query.case_sensitive {
        store.case_sensitive_group(&sorted_key(word))
    } else {
        store.group(&sorted_key_lowercase(word))
    };

    members
        .into_iter()
        .filter(|entry| entry.word() != word)
        .filter(|entry| !(query.exclude_proper_nouns && entry.is_proper_noun()))
        .take(query.limit.unwrap_or(usize::MAX))
        .map(WordEntry::word)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> CorpusStore {
        let mut store = CorpusStore::new();
        store.add_words(&["foo", "bar", "baz", "ofo", "rab", "zab", "oof"]).unwrap();
        store
    }

    fn count(store: &CorpusStore, word: &str, query: &AnagramQuery) -> usize {
        anagrams_for_word(store, word, query).len()
    }

    #[test]
    fn lookup_table() {
        let store = corpus();
        let query = AnagramQuery::new();

        for (word, expected) in [
            ("foo", 2),
            ("bar", 1),
            ("baz", 1),
            ("ofo", 2),
            ("rab", 1),
            ("zab", 1),
            ("Zab", 2),
            ("zzz", 0),
        ] {
            assert_eq!(count(&store, word, &query), expected, "word {word}");
        }
    }

    #[test]
    fn case_sensitive_mode_separates_capitalised_query() {
        let store = corpus();
        let query = AnagramQuery::new().case_sensitive(true);

        assert_eq!(count(&store, "Zab", &query), 0);
        assert_eq!(count(&store, "zab", &query), 1);
        assert_eq!(count(&store, "foo", &query), 2);
    }

    #[test]
    fn limits() {
        let store = corpus();

        for (limit, expected) in [(Some(1), 1), (Some(2), 2), (Some(5), 2), (Some(0), 0), (None, 2)] {
            let query = AnagramQuery::new().with_limit(limit);
            assert_eq!(count(&store, "foo", &query), expected, "limit {limit:?}");
        }
    }

    #[test]
    fn results_follow_corpus_order() {
        let store = corpus();
        let result = anagrams_for_word(&store, "foo", &AnagramQuery::new());
        assert_eq!(result, vec!["ofo", "oof"]);

        let limited = anagrams_for_word(&store, "foo", &AnagramQuery::new().with_limit(Some(1)));
        assert_eq!(limited, vec!["ofo"]);
    }

    #[test]
    fn self_exclusion_is_by_exact_string() {
        let mut store = CorpusStore::new();
        store.add_words(&["Foo", "foo"]).unwrap();

        let result = anagrams_for_word(&store, "foo", &AnagramQuery::new());
        assert_eq!(result, vec!["Foo"]);

        let result = anagrams_for_word(&store, "FOO", &AnagramQuery::new());
        assert_eq!(result, vec!["Foo", "foo"]);
    }

    #[test]
    fn proper_nouns_filtered_before_limit() {
        let mut store = CorpusStore::new();
        store.add_words(&["evil", "Levi", "vile", "live"]).unwrap();

        let query = AnagramQuery::new()
            .excluding_proper_nouns(true)
            .with_limit(Some(2));
        assert_eq!(anagrams_for_word(&store, "veil", &query), vec!["evil", "vile"]);
    }

    #[test]
    fn unknown_word_is_not_an_error() {
        let store = CorpusStore::new();
        assert!(anagrams_for_word(&store, "anything", &AnagramQuery::new()).is_empty());
    }
}
