//! Display functions for command results

use super::formatters::{count_noun, create_progress_bar, format_length, format_stat, word_list};
use crate::commands::{AnagramsResult, BenchmarkResult, CheckResult};
use crate::corpus::AddSummary;
use crate::query::{AnagramGroup, GroupPage};
use crate::stats::LengthStatistics;
use colored::Colorize;
use serde::Serialize;

const WORDS_SHOWN: usize = 12;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print any result as pretty JSON on stdout
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_add_summary(summary: &AddSummary) {
    println!(
        "{} {} added, {} already present",
        "✓".green().bold(),
        count_noun(summary.added, "word", "words"),
        summary.skipped
    );
}

/// Print the result of an anagram lookup
pub fn print_anagrams(result: &AnagramsResult) {
    let mut filters = Vec::new();
    if let Some(limit) = result.limit {
        filters.push(format!("limit {limit}"));
    }
    if result.exclude_proper_nouns {
        filters.push("no proper nouns".to_string());
    }
    if result.case_sensitive {
        filters.push("case-sensitive".to_string());
    }

    let header = format!("Anagrams of {}", result.word.bright_yellow().bold());
    if filters.is_empty() {
        println!("\n{header}");
    } else {
        println!("\n{header} {}", format!("({})", filters.join(", ")).bright_black());
    }

    if result.anagrams.is_empty() {
        println!("  {}", "none found".bright_black());
        return;
    }

    for anagram in &result.anagrams {
        println!("  • {anagram}");
    }
    println!("\n{}", count_noun(result.count, "anagram", "anagrams").green());
}

/// Print word length statistics
pub fn print_statistics(stats: &LengthStatistics) {
    banner("LENGTH STATISTICS");

    println!("\n📊 {}", "Corpus:".bright_cyan().bold());
    println!("   Total words:   {}", stats.total_words.to_string().bold());
    println!("   Shortest:      {}", format_length(stats.min_length));
    println!("   Longest:       {}", format_length(stats.max_length));
    println!(
        "   Average:       {}",
        format_stat(stats.average_length).bright_yellow()
    );
    println!(
        "   Median:        {}",
        format_stat(stats.median_length).bright_yellow()
    );

    if let (Some(average), Some(max)) = (stats.average_length, stats.max_length) {
        let bar = create_progress_bar(average, max as f64, 30);
        println!("\n   Average / longest: [{}]", bar.green());
    }
}

/// Print the largest anagram group
pub fn print_biggest_group(group: &AnagramGroup) {
    banner("BIGGEST ANAGRAM GROUP");

    if group.count == 0 {
        println!("\n   {}", "corpus is empty".bright_black());
        return;
    }

    println!("\n   {}", count_noun(group.count, "word", "words").bright_yellow().bold());
    for word in &group.words {
        println!("   • {word}");
    }
}

/// Print one page of anagram groups
pub fn print_group_page(page: &GroupPage) {
    banner("ANAGRAM GROUPS");

    println!(
        "\n   {} matching, page {} of {} ({} per page)",
        count_noun(page.count, "group", "groups").bold(),
        page.page,
        page.total_pages,
        page.page_size
    );

    if page.results.is_empty() {
        println!("\n   {}", "no groups".bright_black());
        return;
    }

    let largest = page.results.first().map_or(0, |group| group.count);
    println!();
    for group in &page.results {
        let bar = create_progress_bar(group.count as f64, largest as f64, 12);
        println!(
            "   {} {:>3}  {}",
            bar.green(),
            group.count,
            word_list(&group.words, WORDS_SHOWN)
        );
    }

    let mut nav = Vec::new();
    if page.has_previous {
        nav.push(format!("page={} for previous", page.page - 1));
    }
    if page.has_next {
        nav.push(format!("page={} for next", page.page + 1));
    }
    if !nav.is_empty() {
        println!("\n   {}", nav.join(" | ").bright_black());
    }
}

/// Print the result of a mutual-anagram check
pub fn print_check(result: &CheckResult) {
    let words = result.words.join(", ");
    if result.are_anagrams {
        println!("{} {} are anagrams", "✅".green(), words.bold());
    } else {
        println!("{} {} are not anagrams", "❌".red(), words.bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    println!("\n📊 {}", "Lookups:".bright_cyan().bold());
    println!("   Corpus size:      {}", result.corpus_size);
    println!("   Lookups run:      {}", result.lookups);
    println!("   Anagrams found:   {}", result.total_matches);
    println!("   Time taken:       {:.2}ms", result.lookup_ms);
    println!(
        "   Lookups/second:   {}",
        format!("{:.0}", result.lookups_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n⏱  {}", "Single queries:".bright_cyan().bold());
    println!("   Biggest group:    {:.3}ms", result.biggest_group_ms);
    println!("   Groups page:      {:.3}ms", result.groups_ms);
    println!("   Length stats:     {:.3}ms", result.stats_ms);

    if result.lookups == 0 {
        return;
    }

    println!("\n📈 {}", "Anagrams per lookup:".bright_cyan().bold());
    for (&matches, &count) in &result.match_distribution {
        let pct = (count as f64 / result.lookups as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {matches:>2}: {bar} {count:5} ({pct:5.1}%)");
    }
}
