//! Line-oriented interactive shell
//!
//! The only front-end that mutates the corpus. Each line is one command; its
//! arguments go through [`crate::params`] before reaching the engine.

use super::lookup::{AnagramsResult, CheckResult, check_words, lookup_anagrams};
use crate::corpus::AddSummary;
use crate::engine::AnagramEngine;
use crate::error::{EngineError, Result};
use crate::output::display;
use crate::params::{parse_flag, parse_limit, parse_positive};
use crate::query::{AnagramGroup, AnagramQuery, GroupPage};
use crate::stats::LengthStatistics;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(Vec<String>),
    Delete(String),
    DeleteGroup(String),
    Clear,
    Anagrams { word: String, query: AnagramQuery },
    Stats,
    Biggest,
    Groups {
        min_size: Option<usize>,
        page: usize,
        page_size: Option<usize>,
    },
    Check(Vec<String>),
    Help,
    Quit,
}

/// Outcome of executing a [`ShellCommand`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Added(AddSummary),
    Deleted { deleted: String },
    DeletedGroup { word: String, removed: usize },
    Cleared { removed: usize },
    Anagrams(AnagramsResult),
    Stats(LengthStatistics),
    Biggest(AnagramGroup),
    Groups(GroupPage),
    Check(CheckResult),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <word>...                       add words to the corpus
  delete <word>                       remove one word
  delete-group <word>                 remove a word and all its anagrams
  clear                               remove every word
  anagrams <word> [limit=N] [proper=FLAG] [case=FLAG]
                                      stored anagrams of a word
  stats                               word length statistics
  biggest                             largest anagram group
  groups [min=N] [page=N] [size=N]    groups with at least N words
  check <word> <word>...              are the words mutual anagrams?
  help                                show this help
  quit                                leave the shell";

impl ShellCommand {
    /// Parse one input line
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown commands, missing arguments or
    /// malformed options.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(EngineError::invalid("empty command"));
        };
        let args: Vec<&str> = parts.collect();

        match name.to_lowercase().as_str() {
            "add" => {
                if args.is_empty() {
                    return Err(EngineError::invalid("add needs at least one word"));
                }
                Ok(Self::Add(args.iter().map(|s| (*s).to_string()).collect()))
            }
            "delete" | "rm" => single_word(name, &args).map(Self::Delete),
            "delete-group" => single_word(name, &args).map(Self::DeleteGroup),
            "clear" => Ok(Self::Clear),
            "anagrams" | "a" => parse_anagrams(&args),
            "stats" => Ok(Self::Stats),
            "biggest" => Ok(Self::Biggest),
            "groups" => parse_groups(&args),
            "check" => Ok(Self::Check(args.iter().map(|s| (*s).to_string()).collect())),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(EngineError::invalid(format!(
                "unknown command '{other}' (type 'help')"
            ))),
        }
    }
}

fn single_word(command: &str, args: &[&str]) -> Result<String> {
    match args {
        [word] => Ok((*word).to_string()),
        _ => Err(EngineError::invalid(format!("{command} takes exactly one word"))),
    }
}

fn split_option(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .ok_or_else(|| EngineError::invalid(format!("expected key=value, got '{arg}'")))
}

fn parse_anagrams(args: &[&str]) -> Result<ShellCommand> {
    let Some((word, options)) = args.split_first() else {
        return Err(EngineError::invalid("anagrams needs a word"));
    };

    let mut query = AnagramQuery::new();
    for option in options {
        match split_option(option)? {
            ("limit", value) => query = query.with_limit(parse_limit(value)?),
            ("proper", value) => query = query.excluding_proper_nouns(parse_flag(value)?),
            ("case", value) => query = query.case_sensitive(parse_flag(value)?),
            (key, _) => return Err(EngineError::invalid(format!("unknown option '{key}'"))),
        }
    }

    Ok(ShellCommand::Anagrams {
        word: (*word).to_string(),
        query,
    })
}

fn parse_groups(args: &[&str]) -> Result<ShellCommand> {
    let mut min_size = None;
    let mut page = 1;
    let mut page_size = None;

    for option in args {
        match split_option(option)? {
            ("min", value) => min_size = Some(parse_positive("min", value)?),
            ("page", value) => page = parse_positive("page", value)?,
            ("size", value) => page_size = Some(parse_positive("size", value)?),
            (key, _) => return Err(EngineError::invalid(format!("unknown option '{key}'"))),
        }
    }

    Ok(ShellCommand::Groups {
        min_size,
        page,
        page_size,
    })
}

/// Run one command against the engine
///
/// # Errors
///
/// Propagates the engine's `NotFound` and `InvalidInput` errors.
pub fn execute(engine: &AnagramEngine, command: ShellCommand) -> Result<Reply> {
    let reply = match command {
        ShellCommand::Add(words) => Reply::Added(engine.add_words(&words)?),
        ShellCommand::Delete(word) => {
            engine.delete_word(&word)?;
            Reply::Deleted { deleted: word }
        }
        ShellCommand::DeleteGroup(word) => {
            let removed = engine.delete_word_and_anagrams(&word)?;
            Reply::DeletedGroup { word, removed }
        }
        ShellCommand::Clear => Reply::Cleared {
            removed: engine.delete_all(),
        },
        ShellCommand::Anagrams { word, query } => {
            Reply::Anagrams(lookup_anagrams(engine, &word, &query))
        }
        ShellCommand::Stats => Reply::Stats(engine.length_statistics()),
        ShellCommand::Biggest => Reply::Biggest(engine.biggest_group()),
        ShellCommand::Groups {
            min_size,
            page,
            page_size,
        } => {
            let min_size = min_size.unwrap_or(engine.config().default_min_group_size);
            Reply::Groups(engine.groups_at_least(min_size, page, page_size)?)
        }
        ShellCommand::Check(words) => Reply::Check(check_words(engine, &words)?),
        ShellCommand::Help => Reply::Help,
        ShellCommand::Quit => Reply::Quit,
    };
    Ok(reply)
}

/// Print a reply as text or JSON
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_reply(reply: &Reply, json: bool) -> anyhow::Result<()> {
    if json && !matches!(reply, Reply::Help | Reply::Quit) {
        return display::print_json(reply);
    }

    match reply {
        Reply::Added(summary) => display::print_add_summary(summary),
        Reply::Deleted { deleted } => println!("{} {}", "✓ Deleted".green(), deleted.bold()),
        Reply::DeletedGroup { word, removed } => println!(
            "{} {removed} {} with '{word}'",
            "✓ Deleted".green(),
            if *removed == 1 { "word" } else { "words" }
        ),
        Reply::Cleared { removed } => println!("{} {removed} words", "✓ Cleared".green()),
        Reply::Anagrams(result) => display::print_anagrams(result),
        Reply::Stats(stats) => display::print_statistics(stats),
        Reply::Biggest(group) => display::print_biggest_group(group),
        Reply::Groups(page) => display::print_group_page(page),
        Reply::Check(result) => display::print_check(result),
        Reply::Help => println!("{HELP}"),
        Reply::Quit => println!("\n👋 Bye!\n"),
    }
    Ok(())
}

/// Run the shell on stdin until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails. Command errors
/// are printed and the session continues.
pub fn run_shell(engine: &AnagramEngine, json: bool) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Anagram Index - Shell                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{} words loaded. Type 'help' for commands.\n", engine.len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "anagram>".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match ShellCommand::parse(&line).and_then(|command| execute(engine, command)) {
            Ok(reply) => {
                print_reply(&reply, json)?;
                if reply == Reply::Quit {
                    return Ok(());
                }
            }
            Err(err) => println!("{} {err}", "✗".red().bold()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn engine() -> AnagramEngine {
        AnagramEngine::with_words(
            EngineConfig::default(),
            &["stop", "pots", "tops", "Elvis", "lives", "evils", "rat"],
        )
        .unwrap()
    }

    fn run(engine: &AnagramEngine, line: &str) -> Result<Reply> {
        ShellCommand::parse(line).and_then(|command| execute(engine, command))
    }

    #[test]
    fn parse_basic_commands() {
        assert_eq!(ShellCommand::parse("stats").unwrap(), ShellCommand::Stats);
        assert_eq!(ShellCommand::parse("  QUIT ").unwrap(), ShellCommand::Quit);
        assert_eq!(
            ShellCommand::parse("add a b").unwrap(),
            ShellCommand::Add(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            ShellCommand::parse("delete-group stop").unwrap(),
            ShellCommand::DeleteGroup("stop".to_string())
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        for line in ["", "frobnicate", "add", "delete", "delete a b", "anagrams"] {
            assert!(ShellCommand::parse(line).unwrap_err().is_invalid_input(), "{line:?}");
        }
    }

    #[test]
    fn parse_anagram_options() {
        let command = ShellCommand::parse("anagrams lives limit=-1 proper=yes case=off").unwrap();
        assert_eq!(
            command,
            ShellCommand::Anagrams {
                word: "lives".to_string(),
                query: AnagramQuery::new().excluding_proper_nouns(true),
            }
        );

        assert!(ShellCommand::parse("anagrams lives proper=maybe").is_err());
        assert!(ShellCommand::parse("anagrams lives limit").is_err());
        assert!(ShellCommand::parse("anagrams lives colour=red").is_err());
    }

    #[test]
    fn parse_group_options() {
        assert_eq!(
            ShellCommand::parse("groups min=3 page=2 size=5").unwrap(),
            ShellCommand::Groups {
                min_size: Some(3),
                page: 2,
                page_size: Some(5),
            }
        );
        assert!(ShellCommand::parse("groups page=0").is_err());
    }

    #[test]
    fn mutations_through_the_shell() {
        let engine = engine();

        let reply = run(&engine, "add spot stop").unwrap();
        assert_eq!(reply, Reply::Added(AddSummary { added: 1, skipped: 1 }));

        assert_eq!(
            run(&engine, "delete rat").unwrap(),
            Reply::Deleted {
                deleted: "rat".to_string()
            }
        );
        assert!(run(&engine, "delete rat").unwrap_err().is_not_found());

        assert_eq!(
            run(&engine, "delete-group opts").unwrap_err(),
            EngineError::word_not_found("opts")
        );
        assert_eq!(
            run(&engine, "delete-group spot").unwrap(),
            Reply::DeletedGroup {
                word: "spot".to_string(),
                removed: 4
            }
        );

        assert_eq!(run(&engine, "clear").unwrap(), Reply::Cleared { removed: 3 });
        assert!(engine.is_empty());
    }

    #[test]
    fn queries_through_the_shell() {
        let engine = engine();

        let Reply::Anagrams(result) = run(&engine, "anagrams lives proper=true").unwrap() else {
            panic!("expected anagrams reply");
        };
        assert_eq!(result.anagrams, vec!["evils"]);

        let Reply::Groups(page) = run(&engine, "groups").unwrap() else {
            panic!("expected groups reply");
        };
        assert_eq!(page.count, 2);
        // equal sizes fall back to key order: "eilsv" before "opst"
        assert_eq!(page.results[0].words, vec!["Elvis", "lives", "evils"]);

        assert!(run(&engine, "groups page=9").unwrap_err().is_not_found());
        assert!(run(&engine, "check stop").unwrap_err().is_invalid_input());
    }

    #[test]
    fn replies_serialize_without_tags() {
        let json = serde_json::to_string(&Reply::Cleared { removed: 2 }).unwrap();
        assert_eq!(json, r#"{"removed":2}"#);

        let json = serde_json::to_string(&Reply::Added(AddSummary { added: 1, skipped: 0 })).unwrap();
        assert_eq!(json, r#"{"added":1,"skipped":0}"#);
    }
}
