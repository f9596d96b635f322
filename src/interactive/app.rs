//! TUI application state and logic

use crate::commands::parse_round;
use crate::solver::Session;
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

const MAX_MESSAGES: usize = 5;
const PAGE: usize = 10;
/// Words per row in the candidate panel
pub(super) const CANDIDATE_COLUMNS: usize = 6;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// First row of candidates shown in the candidate panel
    pub scroll: usize,
}

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

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let length = session.word_length();
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Type a {length}-letter guess and its feedback, then Enter."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Feedback: g = correct, y = wrong place, x = absent".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            scroll: 0,
        }
    }

    /// Apply the round typed into the input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        let parsed = parse_round(&input, self.session.word_length());
        let applied = parsed.and_then(|(guess, feedback)| {
            self.session
                .apply(&guess, &feedback)
                .map(|round| (round.guess.clone(), round.candidates_after))
        });

        match applied {
            Ok((guess, remaining)) => {
                self.scroll = 0;
                if self.session.is_solved() {
                    self.add_message(
                        &format!("🎉 Solved with {}! Ctrl+N for a new game.", guess.to_uppercase()),
                        MessageStyle::Success,
                    );
                } else if remaining == 0 {
                    self.add_message(
                        "No word fits this feedback. Ctrl+U to undo.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{} → {remaining} candidates", guess.to_uppercase()),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => {
                self.add_message(&format!("Invalid input: {err}"), MessageStyle::Error);
                // Keep the text so it can be corrected
                self.input_buffer = input;
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.scroll = 0;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if let Some(round) = self.session.undo() {
            self.scroll = 0;
            self.add_message(
                &format!("Undid {}", round.guess.to_uppercase()),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
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

    /// Number of candidate rows in the panel
    #[must_use]
    pub fn candidate_rows(&self) -> usize {
        self.session.candidate_count().div_ceil(CANDIDATE_COLUMNS)
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.candidate_rows().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(PAGE as isize),
            KeyCode::PageUp => self.scroll_by(-(PAGE as isize)),
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
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
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
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Trie;

    fn app() -> App {
        let (trie, _) = Trie::from_words(5, ["crane", "crate", "slate", "irate"]);
        App::new(Session::new(trie))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn typing_and_submitting_applies_round() {
        let mut app = app();
        type_text(&mut app, "grate xgggg");
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.candidates(), ["crate", "irate"]);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Info));
    }

    #[test]
    fn invalid_input_is_kept_for_editing() {
        let mut app = app();
        type_text(&mut app, "grate xggg");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_buffer, "grate xggg");
        assert_eq!(app.session.candidate_count(), 4);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "grate xgg");
    }

    #[test]
    fn undo_and_new_game_shortcuts() {
        let mut app = app();
        type_text(&mut app, "grate xgggg");
        press(&mut app, KeyCode::Enter);

        ctrl(&mut app, 'u');
        assert_eq!(app.session.candidate_count(), 4);

        type_text(&mut app, "slate ggggg");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_solved());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Success));

        ctrl(&mut app, 'n');
        assert!(app.session.rounds().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn scrolling_moves_whole_rows() {
        let words = [
            "crane", "crate", "slate", "irate", "grate", "floor", "robot", "speed", "erase",
            "abbey", "geese", "eerie", "plumb", "ghost",
        ];
        let (trie, _) = Trie::from_words(5, words);
        let mut app = App::new(Session::new(trie));
        assert_eq!(app.candidate_rows(), 3);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 2);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn single_row_does_not_scroll() {
        let mut app = app();
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
