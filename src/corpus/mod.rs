//! Corpus storage
//!
//! Owns the word entries and the indexes that make anagram groups cheap to read.

mod store;

pub(crate) use store::derive_entries;
pub use store::{AddSummary, CorpusStore};
