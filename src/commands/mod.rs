//! Command implementations

pub mod bench;
pub mod lookup;
pub mod shell;

pub use bench::{BenchmarkResult, run_benchmark};
pub use lookup::{AnagramsResult, CheckResult, check_words, lookup_anagrams};
pub use shell::{Reply, ShellCommand, execute, print_reply, run_shell};
