//! Core domain types for the anagram corpus
//!
//! This module contains the word record and the pure key derivation functions.
//! Nothing here touches the store or takes a lock.

mod entry;
mod keys;

pub use entry::{MAX_WORD_LENGTH, WordEntry, validate_word};
pub use keys::{AnagramKeys, derive_keys, is_proper_noun, sorted_key, sorted_key_lowercase};
