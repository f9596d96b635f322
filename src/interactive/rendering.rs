//! TUI rendering with ratatui
//!
//! Constraint and candidate views for the interactive filter.

use super::app::{App, CANDIDATE_COLUMNS, MessageStyle};
use crate::output::formatters::format_scope;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const HISTORY_ROWS: usize = 6;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Candidates and history
            Constraint::Percentage(40), // Constraints and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔎 WORD FILTER - {} words of length {}",
        app.session.trie().len(),
        app.session.word_length()
    );
    let header = Paragraph::new(title)
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                          // Candidates
            Constraint::Length(HISTORY_ROWS as u16 + 2), // History
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let title = format!(" Candidates ({}) ", candidates.len());

    let content: Vec<Line> = if candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No word fits the feedback so far",
            Style::default().fg(Color::Red),
        ))]
    } else {
        let first_row = app.scroll.min(app.candidate_rows().saturating_sub(1));
        candidates[first_row * CANDIDATE_COLUMNS..]
            .chunks(CANDIDATE_COLUMNS)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|word| {
                        Span::styled(
                            format!("{word}  "),
                            Style::default().fg(Color::Green),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let rounds = app.session.rounds();
    let history_items: Vec<ListItem> = rounds
        .iter()
        .rev()
        .take(HISTORY_ROWS)
        .enumerate()
        .map(|(i, round)| {
            let content = format!(
                "{}: {} {} {} → {}",
                rounds.len() - i,
                round.guess.to_uppercase(),
                round.feedback.to_emoji(),
                round.candidates_before,
                round.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let scope_rows = app.session.word_length() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(scope_rows), // Per-position scope
            Constraint::Length(3),          // Search space gauge
            Constraint::Min(3),             // Messages
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let model = app.session.model();

    let mut lines: Vec<Line> = model
        .scope()
        .iter()
        .enumerate()
        .map(|(i, scope)| {
            let style = match scope.len() {
                0 => Style::default().fg(Color::Red),
                1 => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>2}: ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format_scope(*scope), style),
            ])
        })
        .collect();

    let required = model.required();
    lines.push(Line::from(vec![
        Span::styled("need: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            if required.is_empty() {
                "-".to_string()
            } else {
                required.to_string()
            },
            Style::default().fg(Color::Yellow),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Allowed Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.trie().len();
    let remaining = app.session.candidate_count();
    let eliminated = total.saturating_sub(remaining);
    let percent = if total > 0 {
        // Bounded by 100
        (eliminated * 100 / total) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Eliminated ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{eliminated}/{total} words"));

    f.render_widget(gauge, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.session.is_solved() {
        (" 🎉 Solved! | Ctrl+N new game, Esc quit ", Color::Green)
    } else {
        (
            " Guess and feedback, e.g. \"crane gyxxg\" (g/y/x or emojis) ",
            Color::Yellow,
        )
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = format!(
        "Round {} | Enter: Apply | Ctrl+U: Undo | Ctrl+N: New | ↑↓ PgUp PgDn: Scroll | Esc: Quit",
        app.session.rounds().len() + 1
    );

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
