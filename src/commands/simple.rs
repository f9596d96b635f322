//! Simple interactive CLI mode
//!
//! Line-based loop: read a guess with its feedback, narrow the dictionary,
//! print what is left.

use super::parse_round;
use crate::core::SolverError;
use crate::output::{print_matches, print_scope};
use crate::solver::{Round, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What a single input line did to the session
#[derive(Debug)]
pub enum LineOutcome {
    Quit,
    Reset,
    Undone(Option<Round>),
    Applied(Round),
    Rejected(SolverError),
    Empty,
}

/// Interpret one line of input against the session
pub fn handle_line(session: &mut Session, line: &str) -> LineOutcome {
    let line = line.trim();

    match line.to_lowercase().as_str() {
        "" => return LineOutcome::Empty,
        "quit" | "q" | "exit" => return LineOutcome::Quit,
        "new" | "n" => {
            session.reset();
            return LineOutcome::Reset;
        }
        "undo" | "u" => return LineOutcome::Undone(session.undo()),
        _ => {}
    }

    let (guess, feedback) = match parse_round(line, session.word_length()) {
        Ok(parts) => parts,
        Err(err) => return LineOutcome::Rejected(err),
    };

    match session.apply(&guess, &feedback) {
        Ok(round) => LineOutcome::Applied(round.clone()),
        Err(err) => LineOutcome::Rejected(err),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let length = session.word_length();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!("{}", "  Wordle Trie - Interactive Mode".bright_cyan().bold());
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n{} words of {length} letters loaded.",
        session.trie().len()
    );
    println!("Enter each guess followed by its feedback, e.g. 'crane gyxxy':");
    println!("  - g = correct position, y = wrong position, x = not in word");
    println!("Commands: 'undo', 'new', 'quit'\n");

    let stdin = io::stdin();
    loop {
        print!("enter guess: ");
        io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            // EOF
            println!();
            return Ok(());
        }

        match handle_line(session, &line) {
            LineOutcome::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            LineOutcome::Reset => {
                println!("\n🔄 New session: {} candidates\n", session.candidate_count());
            }
            LineOutcome::Undone(Some(round)) => {
                println!(
                    "✓ Undid '{}' ({} candidates)\n",
                    round.guess,
                    session.candidate_count()
                );
            }
            LineOutcome::Undone(None) => println!("Nothing to undo!\n"),
            LineOutcome::Rejected(err) => {
                println!("{} {err}\n", "❌ Invalid input:".red());
            }
            LineOutcome::Empty => {}
            LineOutcome::Applied(round) => {
                println!(
                    "\n{} {}  {} → {}",
                    round.guess.to_uppercase().bold(),
                    round.feedback.to_emoji(),
                    round.candidates_before,
                    round.candidates_after
                );
                print_scope(session.model());
                print_matches(session.candidates());

                if session.is_solved() {
                    println!("\n{}", "🎉 Solved!".bright_green().bold());
                } else if session.candidate_count() == 0 {
                    println!(
                        "{}",
                        "No word fits this feedback. Type 'undo' to go back.".yellow()
                    );
                }
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Trie;

    fn session() -> Session {
        let (trie, _) = Trie::from_words(5, ["crane", "crate", "slate", "irate"]);
        Session::new(trie)
    }

    #[test]
    fn applies_valid_round() {
        let mut session = session();
        let outcome = handle_line(&mut session, "grate xgggg\n");

        assert!(matches!(outcome, LineOutcome::Applied(ref round) if round.candidates_after == 2));
        assert_eq!(session.candidates(), ["crate", "irate"]);
    }

    #[test]
    fn rejects_bad_feedback_without_change() {
        let mut session = session();
        let outcome = handle_line(&mut session, "grate xgqgg");

        assert!(matches!(
            outcome,
            LineOutcome::Rejected(SolverError::InvalidFeedbackSymbol { symbol: 'q', .. })
        ));
        assert_eq!(session.candidate_count(), 4);
    }

    #[test]
    fn commands_are_recognized() {
        let mut session = session();
        assert!(matches!(handle_line(&mut session, "QUIT"), LineOutcome::Quit));
        assert!(matches!(handle_line(&mut session, "   "), LineOutcome::Empty));
        assert!(matches!(handle_line(&mut session, "undo"), LineOutcome::Undone(None)));

        handle_line(&mut session, "grate xgggg");
        assert!(matches!(
            handle_line(&mut session, "u"),
            LineOutcome::Undone(Some(_))
        ));
        assert_eq!(session.candidate_count(), 4);

        handle_line(&mut session, "grate xgggg");
        assert!(matches!(handle_line(&mut session, "new"), LineOutcome::Reset));
        assert!(session.rounds().is_empty());
    }
}
