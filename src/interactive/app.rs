//! TUI application state and logic

use crate::engine::AnagramEngine;
use crate::query::{self, AnagramGroup, AnagramQuery};
use crate::stats::{self, LengthStatistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Groups shown in the side panel
pub const TOP_GROUPS: usize = 8;

const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Corpus-wide figures read from one snapshot
#[derive(Debug, Clone, Default)]
pub struct Overview {
    pub biggest: AnagramGroup,
    pub top_groups: Vec<AnagramGroup>,
    pub group_count: usize,
    pub stats: LengthStatistics,
}

/// Application state
pub struct App {
    pub engine: AnagramEngine,
    pub query: AnagramQuery,
    pub input_buffer: String,
    pub anagrams: Vec<String>,
    pub overview: Overview,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(engine: AnagramEngine) -> Self {
        let mut app = Self {
            engine,
            query: AnagramQuery::new(),
            input_buffer: String::new(),
            anagrams: Vec::new(),
            overview: Overview::default(),
            messages: vec![Message {
                text: "Type a word to see its anagrams.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };
        app.refresh_overview();
        app
    }

    /// Re-read the corpus-wide panels
    pub fn refresh_overview(&mut self) {
        let min_size = self.engine.config().default_min_group_size;
        self.overview = self.engine.read(|store| {
            let page = query::groups_at_least_size(store, min_size, 1, TOP_GROUPS).ok();
            Overview {
                biggest: query::biggest_group(store),
                group_count: page.as_ref().map_or(0, |page| page.count),
                top_groups: page.map(|page| page.results).unwrap_or_default(),
                stats: stats::length_statistics(store),
            }
        });
    }

    /// Look up the anagrams of the current input
    pub fn lookup(&mut self) {
        let word = self.input_buffer.trim();
        self.anagrams = if word.is_empty() {
            Vec::new()
        } else {
            self.engine.anagrams_for(word, &self.query)
        };
    }

    pub fn toggle_proper_nouns(&mut self) {
        let exclude = !self.query.exclude_proper_nouns;
        self.query = self.query.excluding_proper_nouns(exclude);
        self.lookup();
        let state = if exclude { "hidden" } else { "shown" };
        self.add_message(&format!("Proper nouns {state}"), MessageStyle::Info);
    }

    pub fn toggle_case_sensitive(&mut self) {
        let case_sensitive = !self.query.case_sensitive;
        self.query = self.query.case_sensitive(case_sensitive);
        self.lookup();
        let state = if case_sensitive { "case-sensitive" } else { "case-insensitive" };
        self.add_message(&format!("Matching is {state}"), MessageStyle::Info);
    }

    /// Report the current lookup in the message panel
    pub fn submit(&mut self) {
        let word = self.input_buffer.trim().to_string();
        if word.is_empty() {
            self.add_message("Nothing to look up", MessageStyle::Error);
            return;
        }

        self.lookup();
        if self.anagrams.is_empty() {
            self.add_message(&format!("No anagrams of '{word}'"), MessageStyle::Error);
        } else {
            self.add_message(
                &format!("{} anagrams of '{word}'", self.anagrams.len()),
                MessageStyle::Success,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only key presses (Windows also reports releases)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_proper_nouns(),
            KeyCode::BackTab => self.toggle_case_sensitive(),
            KeyCode::Char(c) if !c.is_whitespace() => {
                self.input_buffer.push(c);
                self.lookup();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.lookup();
            }
            KeyCode::Delete => {
                self.input_buffer.clear();
                self.lookup();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
