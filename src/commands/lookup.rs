//! One-shot query commands
//!
//! Wraps engine reads in small result records that carry the request next to
//! the answer, so both the text and JSON printers have everything they need.

use crate::engine::AnagramEngine;
use crate::error::Result;
use crate::query::AnagramQuery;
use serde::Serialize;

/// Answer to an anagram lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramsResult {
    pub word: String,
    pub limit: Option<usize>,
    pub exclude_proper_nouns: bool,
    pub case_sensitive: bool,
    pub count: usize,
    pub anagrams: Vec<String>,
}

/// Answer to a mutual-anagram check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub words: Vec<String>,
    pub are_anagrams: bool,
}

/// Look up the stored anagrams of `word`
#[must_use]
pub fn lookup_anagrams(engine: &AnagramEngine, word: &str, query: &AnagramQuery) -> AnagramsResult {
    let anagrams = engine.anagrams_for(word, query);

    AnagramsResult {
        word: word.to_string(),
        limit: query.limit,
        exclude_proper_nouns: query.exclude_proper_nouns,
        case_sensitive: query.case_sensitive,
        count: anagrams.len(),
        anagrams,
    }
}

/// Check whether `words` are mutual anagrams
///
/// # Errors
///
/// Returns `InvalidInput` for fewer than two words.
pub fn check_words(engine: &AnagramEngine, words: &[String]) -> Result<CheckResult> {
    let are_anagrams = engine.are_anagrams(words)?;
    Ok(CheckResult {
        words: words.to_vec(),
        are_anagrams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn engine() -> AnagramEngine {
        AnagramEngine::with_words(EngineConfig::default(), &["stop", "pots", "Tops", "spot"])
            .unwrap()
    }

    #[test]
    fn lookup_carries_request() {
        let query = AnagramQuery::new().with_limit(Some(5)).excluding_proper_nouns(true);
        let result = lookup_anagrams(&engine(), "spot", &query);

        assert_eq!(result.word, "spot");
        assert_eq!(result.limit, Some(5));
        assert!(result.exclude_proper_nouns);
        assert_eq!(result.anagrams, vec!["stop", "pots"]);
        assert_eq!(result.count, 2);
    }

    #[test]
    fn lookup_serializes() {
        let result = lookup_anagrams(&engine(), "opts", &AnagramQuery::new().with_limit(Some(1)));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["anagrams"][0], "stop");
        assert_eq!(json["case_sensitive"], false);
    }

    #[test]
    fn check_words_results() {
        let engine = engine();
        let words = vec!["Listen".to_string(), "silent".to_string()];
        assert!(check_words(&engine, &words).unwrap().are_anagrams);

        let words = vec!["only".to_string()];
        assert!(check_words(&engine, &words).unwrap_err().is_invalid_input());
    }
}
