//! Anagram Index
//!
//! An in-memory anagram corpus: words are grouped by their sorted letters so
//! anagram lookups, group rankings and length statistics are index reads.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_index::config::EngineConfig;
//! use anagram_index::engine::AnagramEngine;
//! use anagram_index::query::AnagramQuery;
//!
//! let engine = AnagramEngine::new(EngineConfig::default());
//! engine.add_words(&["listen", "silent", "enlist", "Tinsel"]).unwrap();
//!
//! let anagrams = engine.anagrams_for("inlets", &AnagramQuery::new().excluding_proper_nouns(true));
//! assert_eq!(anagrams, vec!["listen", "silent", "enlist"]);
//!
//! assert_eq!(engine.biggest_group().count, 4);
//! assert!(engine.are_anagrams(&["Listen", "Silent"]).unwrap());
//! ```

// Core domain types
pub mod core;

// Indexed word storage
pub mod corpus;

// Read-only queries and statistics
pub mod query;
pub mod stats;

// Locked engine facade
pub mod engine;

pub mod config;
pub mod error;
pub mod params;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
