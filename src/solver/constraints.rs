//! Constraint model accumulated from guess feedback
//!
//! Tracks, for every position, the letters still allowed there, and the set
//! of letters known to occur somewhere in the answer without a pinned
//! position. Scopes only ever shrink while a model is alive.

use crate::core::{Feedback, FeedbackPattern, LetterSet, SolverError, parse_letters};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Per-position allowed letters plus required letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintModel {
    scope: Vec<LetterSet>,
    required: LetterSet,
}

impl ConstraintModel {
    /// Unconstrained model: every letter allowed everywhere, nothing required
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            scope: vec![LetterSet::FULL; word_length],
            required: LetterSet::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.scope.len()
    }

    /// Letters still allowed at each position
    #[inline]
    #[must_use]
    pub fn scope(&self) -> &[LetterSet] {
        &self.scope
    }

    /// Letters known to be in the answer at an unresolved position
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Some position has no letter left, so no word can match
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        self.scope.iter().any(|allowed| allowed.is_empty())
    }

    /// Whether `word` satisfies every scope and contains every required letter
    ///
    /// This is the per-word form of what enumeration computes over the trie.
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        let Ok(letters) = parse_letters(word, self.word_length()) else {
            return false;
        };

        let in_scope = letters
            .iter()
            .zip(&self.scope)
            .all(|(&letter, allowed)| allowed.contains(letter));
        let present: LetterSet = letters.iter().copied().collect();

        in_scope && self.required.is_subset(present)
    }

    /// Apply one round of feedback given as raw strings
    ///
    /// # Errors
    /// - `LengthMismatch` if the guess or the feedback is not the configured length
    /// - `InvalidLetter` if the guess contains a character outside `a..=z`
    /// - `InvalidFeedbackSymbol` if the feedback contains an unknown symbol
    ///
    /// The model is unchanged when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::solver::ConstraintModel;
    ///
    /// let mut model = ConstraintModel::new(5);
    /// model.apply_feedback("crane", "gxyxx").unwrap();
    ///
    /// assert_eq!(model.scope()[0].to_string(), "c");
    /// assert!(model.required().contains(b'a'));
    /// assert!(!model.scope()[1].contains(b'r'));
    /// ```
    pub fn apply_feedback(&mut self, guess: &str, feedback: &str) -> Result<(), SolverError> {
        let letters = parse_letters(guess, self.word_length())?;

        let actual = feedback.chars().count();
        if actual != self.word_length() {
            return Err(SolverError::LengthMismatch {
                expected: self.word_length(),
                actual,
            });
        }
        let pattern = FeedbackPattern::parse(feedback)?;

        self.commit(&letters, &pattern);
        Ok(())
    }

    /// Apply one round of feedback with an already parsed pattern
    ///
    /// # Errors
    /// Same as [`ConstraintModel::apply_feedback`], minus symbol errors.
    pub fn apply(&mut self, guess: &str, pattern: &FeedbackPattern) -> Result<(), SolverError> {
        let letters = parse_letters(guess, self.word_length())?;

        if pattern.len() != self.word_length() {
            return Err(SolverError::LengthMismatch {
                expected: self.word_length(),
                actual: pattern.len(),
            });
        }

        self.commit(&letters, pattern);
        Ok(())
    }

    /// Run the feedback passes on validated input
    ///
    /// Pass order matters when a guess repeats a letter: an `Absent` mark
    /// only purges its letter when no other position of the same guess
    /// confirmed that letter.
    pub(super) fn commit(&mut self, letters: &[u8], pattern: &FeedbackPattern) {
        let marks = pattern.marks();

        // Copies of each letter confirmed by this guess
        let mut confirmed: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, mark) in letters.iter().zip(marks) {
            if mark.confirms_letter() {
                *confirmed.entry(letter).or_insert(0) += 1;
            }
        }

        for (i, (&letter, &mark)) in letters.iter().zip(marks).enumerate() {
            if mark == Feedback::Correct {
                self.scope[i] = LetterSet::single(letter);
            }
        }

        for (i, (&letter, &mark)) in letters.iter().zip(marks).enumerate() {
            if mark == Feedback::Present {
                self.scope[i].remove(letter);
                self.required.insert(letter);
            }
        }

        for (&letter, &mark) in letters.iter().zip(marks) {
            if mark == Feedback::Absent && !confirmed.contains_key(&letter) {
                for allowed in &mut self.scope {
                    allowed.remove(letter);
                }
            }
        }

        debug!(
            guess = %String::from_utf8_lossy(letters),
            feedback = %pattern,
            scope = ?self.scope.iter().map(|s| s.len()).collect::<Vec<_>>(),
            required = %self.required,
            "applied feedback"
        );
    }
}
