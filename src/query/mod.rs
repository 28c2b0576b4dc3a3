//! Read-only queries over a corpus snapshot
//!
//! Every function takes `&CorpusStore`; locking is the caller's concern.

mod anagrams;
mod check;
mod groups;

pub use anagrams::{AnagramQuery, anagrams_for_word};
pub use check::are_anagrams;
pub use groups::{AnagramGroup, GroupPage, MIN_GROUP_SIZE, biggest_group, groups_at_least_size};
