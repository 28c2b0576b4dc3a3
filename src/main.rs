//! Anagram Index - CLI
//!
//! Loads a word list into an anagram engine and exposes every query as a
//! subcommand, plus a mutating shell, a TUI explorer and a benchmark.

use anagram_index::{
    commands::{check_words, lookup_anagrams, run_benchmark, run_shell},
    config::EngineConfig,
    engine::AnagramEngine,
    output::{
        print_anagrams, print_benchmark_result, print_biggest_group, print_check,
        print_group_page, print_json, print_statistics,
    },
    params::{parse_flag, parse_limit},
    query::AnagramQuery,
    wordlists::{SAMPLE, loader::load_from_file, loader::words_from_slice},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(
    name = "anagram_index",
    about = "Anagram corpus engine: lookups, groups and length statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'sample' (default, embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,

    /// JSON engine config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI explorer (default)
    Explore,

    /// Line-oriented shell that can also add and delete words
    Shell,

    /// Stored anagrams of a word
    Anagrams {
        word: String,

        /// Maximum number of results; negative means unlimited
        #[arg(short, long, allow_hyphen_values = true)]
        limit: Option<String>,

        /// Drop title-cased words (true/false, 1/0, yes/no, on/off)
        #[arg(long, value_name = "FLAG", num_args = 0..=1, default_missing_value = "true")]
        exclude_proper_nouns: Option<String>,

        /// Match letter case exactly
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Word length statistics
    Stats,

    /// Largest anagram group
    Biggest,

    /// Anagram groups with at least a given number of words
    Groups {
        /// Minimum group size (at least 2)
        #[arg(short, long)]
        min_size: Option<usize>,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Groups per page
        #[arg(short = 's', long)]
        page_size: Option<usize>,
    },

    /// Check whether words are mutual anagrams
    Check { words: Vec<String> },

    /// Benchmark random lookups against the corpus
    Bench {
        /// Number of lookups
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list selected by -w
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "sample" => Ok(words_from_slice(SAMPLE)),
        path => load_from_file(path),
    }
}

fn build_engine(cli: &Cli) -> Result<AnagramEngine> {
    let config = cli
        .config
        .as_ref()
        .map(EngineConfig::load)
        .transpose()?
        .unwrap_or_default();

    let words = load_words(&cli.wordlist)?;
    let engine = AnagramEngine::new(config);
    let summary = engine
        .add_words(&words)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;

    info!(
        wordlist = %cli.wordlist,
        added = summary.added,
        skipped = summary.skipped,
        "corpus loaded"
    );
    Ok(engine)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine = build_engine(&cli)?;

    // Default to the explorer if no command given
    let command = cli.command.unwrap_or(Commands::Explore);

    match command {
        Commands::Explore => run_explore_command(engine),
        Commands::Shell => run_shell(&engine, cli.json),
        Commands::Anagrams {
            word,
            limit,
            exclude_proper_nouns,
            case_sensitive,
        } => run_anagrams_command(
            &engine,
            &word,
            limit.as_deref(),
            exclude_proper_nouns.as_deref(),
            case_sensitive,
            cli.json,
        ),
        Commands::Stats => {
            let stats = engine.length_statistics();
            if cli.json {
                print_json(&stats)
            } else {
                print_statistics(&stats);
                Ok(())
            }
        }
        Commands::Biggest => {
            let group = engine.biggest_group();
            if cli.json {
                print_json(&group)
            } else {
                print_biggest_group(&group);
                Ok(())
            }
        }
        Commands::Groups {
            min_size,
            page,
            page_size,
        } => {
            let min_size = min_size.unwrap_or(engine.config().default_min_group_size);
            let page = engine.groups_at_least(min_size, page, page_size)?;
            if cli.json {
                print_json(&page)
            } else {
                print_group_page(&page);
                Ok(())
            }
        }
        Commands::Check { words } => {
            let result = check_words(&engine, &words)?;
            if cli.json {
                print_json(&result)
            } else {
                print_check(&result);
                Ok(())
            }
        }
        Commands::Bench { count } => {
            let result = run_benchmark(&engine, count, !cli.json);
            if cli.json {
                print_json(&result)
            } else {
                print_benchmark_result(&result);
                Ok(())
            }
        }
    }
}

fn run_anagrams_command(
    engine: &AnagramEngine,
    word: &str,
    limit: Option<&str>,
    exclude_proper_nouns: Option<&str>,
    case_sensitive: bool,
    json: bool,
) -> Result<()> {
    let limit = limit.map(parse_limit).transpose()?.flatten();
    let exclude_proper_nouns = exclude_proper_nouns
        .map(parse_flag)
        .transpose()?
        .unwrap_or(false);

    let query = AnagramQuery::new()
        .with_limit(limit)
        .excluding_proper_nouns(exclude_proper_nouns)
        .case_sensitive(case_sensitive);
    let result = lookup_anagrams(engine, word, &query);

    if json {
        print_json(&result)
    } else {
        print_anagrams(&result);
        Ok(())
    }
}

fn run_explore_command(engine: AnagramEngine) -> Result<()> {
    use anagram_index::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
