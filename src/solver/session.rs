//! A solving session: one dictionary, one constraint model, and the rounds
//! applied so far
//!
//! The session keeps the current candidate list up to date after every
//! round, so front ends can render it without re-walking the trie.

use super::{ConstraintModel, enumerate, enumerate_parallel};
use crate::core::{FeedbackPattern, SolverError, parse_letters};
use crate::dictionary::Trie;
use tracing::debug;

/// One applied guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The guess, lowercased
    pub guess: String,
    pub feedback: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solving session over a fixed dictionary
#[derive(Debug, Clone)]
pub struct Session {
    trie: Trie,
    model: ConstraintModel,
    rounds: Vec<Round>,
    candidates: Vec<String>,
    parallel: bool,
}

impl Session {
    /// Start a session with no feedback applied
    #[must_use]
    pub fn new(trie: Trie) -> Self {
        let model = ConstraintModel::new(trie.word_length());
        let candidates = enumerate(&trie, &model);
        Self {
            trie,
            model,
            rounds: Vec::new(),
            candidates,
            parallel: false,
        }
    }

    /// Use the rayon-backed enumeration from now on
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Apply a guess and its feedback string, then refresh the candidates
    ///
    /// # Errors
    /// Returns the model's validation error; the session is unchanged in
    /// that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::dictionary::Trie;
    /// use wordle_trie::solver::Session;
    ///
    /// let (trie, _) = Trie::from_words(5, ["crane", "crate", "slate"]);
    /// let mut session = Session::new(trie);
    ///
    /// let round = session.apply("ovate", "xxggg").unwrap();
    /// assert_eq!(round.candidates_after, 2);
    /// assert_eq!(session.candidates(), ["crate", "slate"]);
    /// ```
    pub fn apply(&mut self, guess: &str, feedback: &str) -> Result<&Round, SolverError> {
        // Guess errors take precedence over feedback errors
        parse_letters(guess, self.word_length())?;

        let actual = feedback.chars().count();
        if actual != self.word_length() {
            return Err(SolverError::LengthMismatch {
                expected: self.word_length(),
                actual,
            });
        }
        let pattern = FeedbackPattern::parse(feedback)?;
        self.apply_pattern(guess, pattern)
    }

    /// Apply a guess with an already parsed feedback pattern
    ///
    /// # Errors
    /// Returns the model's validation error; the session is unchanged in
    /// that case.
    pub fn apply_pattern(
        &mut self,
        guess: &str,
        feedback: FeedbackPattern,
    ) -> Result<&Round, SolverError> {
        self.model.apply(guess, &feedback)?;

        let candidates_before = self.candidates.len();
        self.refresh();

        self.rounds.push(Round {
            guess: guess.to_ascii_lowercase(),
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Drop the last round, rebuilding the model from the remaining ones
    ///
    /// Scopes cannot grow back inside a model, so undo starts a fresh model
    /// and replays history into it.
    pub fn undo(&mut self) -> Option<Round> {
        let undone = self.rounds.pop()?;

        let mut model = ConstraintModel::new(self.word_length());
        for round in &self.rounds {
            model.commit(round.guess.as_bytes(), &round.feedback);
        }
        self.model = model;
        self.refresh();

        debug!(guess = %undone.guess, remaining = self.candidates.len(), "undid round");
        Some(undone)
    }

    /// Forget every round and start over with the same dictionary
    pub fn reset(&mut self) {
        self.model = ConstraintModel::new(self.word_length());
        self.rounds.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.candidates = if self.parallel {
            enumerate_parallel(&self.trie, &self.model)
        } else {
            enumerate(&self.trie, &self.model)
        };
    }

    /// Current matches in ascending order
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn model(&self) -> &ConstraintModel {
        &self.model
    }

    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.trie.word_length()
    }

    /// The last round was all `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rounds.last().is_some_and(|round| round.feedback.is_solved())
    }
}
