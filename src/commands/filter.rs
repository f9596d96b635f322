//! One-shot filtering
//!
//! Applies a list of rounds given on the command line and returns the words
//! that survive all of them.

use super::parse_round;
use crate::solver::Session;
use anyhow::{Context, Result};

/// Result of a one-shot filter
pub struct FilterResult {
    pub rounds_applied: usize,
    pub matches: Vec<String>,
}

/// Apply every round in order and collect the remaining words
///
/// Each round is a single argument such as `crane:gyxxy`.
///
/// # Errors
///
/// Returns an error naming the first round that is malformed or fails
/// validation; no further rounds are applied.
pub fn filter_words(session: &mut Session, rounds: &[String]) -> Result<FilterResult> {
    for (index, round) in rounds.iter().enumerate() {
        let (guess, feedback) = parse_round(round, session.word_length())
            .with_context(|| format!("round {} ('{round}') is malformed", index + 1))?;
        session
            .apply(&guess, &feedback)
            .with_context(|| format!("round {} ('{round}') was rejected", index + 1))?;
    }

    Ok(FilterResult {
        rounds_applied: session.rounds().len(),
        matches: session.candidates().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Trie;

    fn session() -> Session {
        let (trie, _) = Trie::from_words(5, ["abcde", "after", "altef", "birto", "axaya"]);
        Session::new(trie)
    }

    #[test]
    fn no_rounds_returns_everything() {
        let mut session = session();
        let result = filter_words(&mut session, &[]).unwrap();
        assert_eq!(result.rounds_applied, 0);
        assert_eq!(result.matches.len(), 5);
    }

    #[test]
    fn rounds_apply_in_order() {
        let mut session = session();
        let rounds = vec!["afxgh:gxxxx".to_string()];
        let result = filter_words(&mut session, &rounds).unwrap();

        assert_eq!(result.rounds_applied, 1);
        assert_eq!(result.matches, vec!["abcde"]);
    }

    #[test]
    fn bad_round_is_reported_with_its_index() {
        let mut session = session();
        let rounds = vec!["afxgh:gxxxx".to_string(), "after:gxxq".to_string()];
        let err = filter_words(&mut session, &rounds).err().unwrap();

        assert!(err.to_string().contains("round 2"));
        assert_eq!(session.rounds().len(), 1);
    }
}
