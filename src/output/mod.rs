//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_add_summary, print_anagrams, print_benchmark_result, print_biggest_group, print_check,
    print_group_page, print_json, print_statistics,
};
