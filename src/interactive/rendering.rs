//! TUI rendering with ratatui
//!
//! Lookup on the left, corpus overview on the right.

use super::app::{App, MessageStyle};
use crate::output::formatters::{create_progress_bar, format_length, format_stat, word_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const GROUP_WORDS_SHOWN: usize = 6;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_lookup_panel(f, app, main_chunks[0]);
    render_overview_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAM INDEX - Explorer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_lookup_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_anagrams(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_anagrams(f: &mut Frame, app: &App, area: Rect) {
    let word = app.input_buffer.trim();
    let title = if word.is_empty() {
        " Anagrams ".to_string()
    } else {
        format!(" Anagrams of {word} ({}) ", app.anagrams.len())
    };

    let items: Vec<ListItem> = if word.is_empty() {
        vec![ListItem::new("Start typing a word").style(Style::default().fg(Color::DarkGray))]
    } else if app.anagrams.is_empty() {
        vec![ListItem::new("No anagrams").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.anagrams
            .iter()
            .map(|anagram| {
                ListItem::new(Line::from(vec![
                    Span::raw("  • "),
                    Span::styled(
                        anagram.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_overview_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Biggest group
            Constraint::Min(6),    // Top groups
            Constraint::Length(7), // Statistics
            Constraint::Length(3), // Gauge
        ])
        .split(area);

    render_biggest_group(f, app, chunks[0]);
    render_top_groups(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
    render_length_gauge(f, app, chunks[3]);
}

fn render_biggest_group(f: &mut Frame, app: &App, area: Rect) {
    let biggest = &app.overview.biggest;
    let content = if biggest.count == 0 {
        vec![Line::from("Corpus is empty")]
    } else {
        vec![
            Line::from(vec![
                Span::raw("Size: "),
                Span::styled(
                    biggest.count.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(word_list(&biggest.words, GROUP_WORDS_SHOWN)),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Biggest Group ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_top_groups(f: &mut Frame, app: &App, area: Rect) {
    let largest = app.overview.biggest.count as f64;
    let items: Vec<ListItem> = app
        .overview
        .top_groups
        .iter()
        .map(|group| {
            let bar = create_progress_bar(group.count as f64, largest, 8);
            ListItem::new(Line::from(vec![
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {:>2} ", group.count)),
                Span::raw(word_list(&group.words, GROUP_WORDS_SHOWN)),
            ]))
        })
        .collect();

    let title = format!(
        " Top Groups ({} of {}) ",
        app.overview.top_groups.len(),
        app.overview.group_count
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.overview.stats;
    let content = vec![
        Line::from(format!("Words:    {}", stats.total_words)),
        Line::from(format!("Shortest: {}", format_length(stats.min_length))),
        Line::from(format!("Longest:  {}", format_length(stats.max_length))),
        Line::from(format!("Average:  {}", format_stat(stats.average_length))),
        Line::from(format!("Median:   {}", format_stat(stats.median_length))),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Word Lengths ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_length_gauge(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.overview.stats;
    let (percent, label) = match (stats.average_length, stats.max_length) {
        (Some(average), Some(max)) if max > 0 => (
            ((average / max as f64) * 100.0).min(100.0) as u16,
            format!("average {average:.1} of longest {max}"),
        ),
        _ => (0, "no words".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Average / Longest ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let proper = if app.query.exclude_proper_nouns { "hidden" } else { "shown" };
    let case = if app.query.case_sensitive { "sensitive" } else { "insensitive" };
    let text = format!(
        "{} words | proper nouns {proper} (Tab) | case {case} (Shift+Tab) | Del: clear | Esc: quit",
        app.overview.stats.total_words
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::AnagramEngine;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_lookup_and_overview() {
        let engine =
            AnagramEngine::with_words(EngineConfig::default(), &["stop", "pots", "tops", "rat"])
                .unwrap();
        let mut app = App::new(engine);
        app.input_buffer = "spot".to_string();
        app.lookup();

        let screen = render(&app);
        assert!(screen.contains("Anagrams of spot (3)"));
        assert!(screen.contains("Biggest Group"));
        assert!(screen.contains("stop, pots, tops"));
    }

    #[test]
    fn renders_empty_corpus() {
        let app = App::new(AnagramEngine::default());
        let screen = render(&app);

        assert!(screen.contains("Corpus is empty"));
        assert!(screen.contains("no words"));
    }
}
