//! Query benchmark
//!
//! Times random anagram lookups against the loaded corpus, then one pass of
//! each group and statistics query.

use crate::engine::AnagramEngine;
use crate::query::{AnagramQuery, MIN_GROUP_SIZE};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use serde::Serialize;
use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub corpus_size: usize,
    pub lookups: usize,
    /// Anagrams returned across all lookups
    pub total_matches: usize,
    pub lookup_ms: f64,
    pub lookups_per_second: f64,
    pub biggest_group_ms: f64,
    pub groups_ms: f64,
    pub stats_ms: f64,
    /// Lookups keyed by the number of anagrams they returned
    pub match_distribution: BTreeMap<usize, usize>,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Run `count` lookups of randomly chosen corpus words
///
/// Words are drawn with replacement. An empty corpus runs no lookups.
pub fn run_benchmark(engine: &AnagramEngine, count: usize, show_progress: bool) -> BenchmarkResult {
    let words = engine.words();
    let mut rng = rand::rng();
    let query = AnagramQuery::new();

    let pb = progress_bar(count, show_progress && !words.is_empty());
    let mut lookups = 0;
    let mut total_matches = 0;
    let mut match_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();
    for idx in 0..count {
        let Some(word) = words.choose(&mut rng) else {
            break;
        };

        let matches = engine.anagrams_for(word, &query).len();
        lookups += 1;
        total_matches += matches;
        *match_distribution.entry(matches).or_insert(0) += 1;

        if idx % 100 == 0 {
            pb.set_message(format!("last: {word} ({matches})"));
        }
        pb.inc(1);
    }
    let lookup_time = start.elapsed();
    pb.finish_with_message("Complete!");

    let start = Instant::now();
    black_box(engine.biggest_group());
    let biggest_group_time = start.elapsed();

    let start = Instant::now();
    black_box(engine.groups_at_least(MIN_GROUP_SIZE, 1, None).ok());
    let groups_time = start.elapsed();

    let start = Instant::now();
    black_box(engine.length_statistics());
    let stats_time = start.elapsed();

    let lookups_per_second = if lookups == 0 || lookup_time.is_zero() {
        0.0
    } else {
        lookups as f64 / lookup_time.as_secs_f64()
    };

    info!(lookups, total_matches, lookups_per_second, "benchmark finished");

    BenchmarkResult {
        corpus_size: words.len(),
        lookups,
        total_matches,
        lookup_ms: millis(lookup_time),
        lookups_per_second,
        biggest_group_ms: millis(biggest_group_time),
        groups_ms: millis(groups_time),
        stats_ms: millis(stats_time),
        match_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::wordlists::SAMPLE;

    fn sample_engine() -> AnagramEngine {
        AnagramEngine::with_words(EngineConfig::default(), SAMPLE).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&sample_engine(), 50, false);

        assert_eq!(result.corpus_size, SAMPLE.len());
        assert_eq!(result.lookups, 50);
        assert!(result.lookup_ms >= 0.0);
    }

    #[test]
    fn distribution_sums_to_lookups() {
        let result = run_benchmark(&sample_engine(), 40, false);

        let lookups: usize = result.match_distribution.values().sum();
        assert_eq!(lookups, result.lookups);

        let matches: usize = result
            .match_distribution
            .iter()
            .map(|(matches, lookups)| matches * lookups)
            .sum();
        assert_eq!(matches, result.total_matches);
    }

    #[test]
    fn match_counts_bounded_by_biggest_group() {
        let engine = sample_engine();
        let biggest = engine.biggest_group().count;
        let result = run_benchmark(&engine, 40, false);

        for &matches in result.match_distribution.keys() {
            assert!(matches < biggest);
        }
    }

    #[test]
    fn benchmark_empty_corpus() {
        let result = run_benchmark(&AnagramEngine::default(), 10, false);

        assert_eq!(result.lookups, 0);
        assert_eq!(result.total_matches, 0);
        assert!(result.match_distribution.is_empty());
        assert!(result.lookups_per_second.abs() < f64::EPSILON);
    }
}
