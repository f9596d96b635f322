//! Per-letter feedback and feedback patterns
//!
//! A feedback pattern is the sequence of marks the game reports for one guess:
//! - `Correct` (green): the letter is at this exact position
//! - `Present` (yellow): the letter is in the word, but not here
//! - `Absent` (gray): the letter does not occur, unless the same guess
//!   confirmed it at another position

use super::SolverError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'g'/'G'/'2'/🟩 for correct
    /// - 'y'/'Y'/'1'/🟨 for present
    /// - 'x'/'X'/'b'/'B'/'0'/'-'/'_'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '2' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '1' | '🟨' => Some(Self::Present),
            'x' | 'X' | 'b' | 'B' | '0' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical ASCII symbol (`g`, `y` or `x`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether this mark confirms the letter occurs in the target
    #[inline]
    #[must_use]
    pub const fn confirms_letter(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

/// Feedback marks for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    #[must_use]
    pub const fn new(marks: Vec<Feedback>) -> Self {
        Self(marks)
    }

    /// Parse a pattern such as `"gyxxg"` or `"🟩🟨⬜⬜🟩"`
    ///
    /// Length is not checked here; the constraint model validates it against
    /// the configured word length.
    ///
    /// # Errors
    /// Returns `InvalidFeedbackSymbol` for the first unrecognized character.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Feedback, FeedbackPattern};
    ///
    /// let pattern = FeedbackPattern::parse("gYx").unwrap();
    /// assert_eq!(
    ///     pattern.marks(),
    ///     &[Feedback::Correct, Feedback::Present, Feedback::Absent]
    /// );
    /// assert!(FeedbackPattern::parse("gq").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Feedback::from_symbol(symbol)
                    .ok_or(SolverError::InvalidFeedbackSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Feedback the game would give for `guess` when the answer is `target`
    ///
    /// Standard duplicate-letter rules: exact matches are marked first and
    /// consume their letter, then remaining letters are marked present while
    /// unconsumed copies remain in the target.
    ///
    /// # Panics
    /// Panics in debug mode if the two words differ in length
    #[must_use]
    pub fn between(guess: &[u8], target: &[u8]) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "words must have equal length");

        let mut marks = vec![Feedback::Absent; guess.len()];
        let mut available: FxHashMap<u8, usize> = FxHashMap::default();
        for &letter in target {
            *available.entry(letter).or_insert(0) += 1;
        }

        // First pass: exact matches
        for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                marks[i] = Feedback::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, while copies remain
        for (i, &g) in guess.iter().enumerate() {
            if marks[i] == Feedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&mark| mark == Feedback::Correct)
    }

    /// Render as colored squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl FromStr for FeedbackPattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Correct, Present};

    #[test]
    fn parse_is_case_insensitive() {
        let lower = FeedbackPattern::parse("gyxgy").unwrap();
        let upper = FeedbackPattern::parse("GYXGY").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.marks(), &[Correct, Present, Absent, Correct, Present]);
    }

    #[test]
    fn parse_accepts_emoji_and_dashes() {
        let emoji = FeedbackPattern::parse("🟩🟨⬜⬛🟩").unwrap();
        let dashes = FeedbackPattern::parse("gy-_g").unwrap();
        assert_eq!(emoji, dashes);
    }

    #[test]
    fn parse_reports_first_bad_symbol() {
        assert_eq!(
            FeedbackPattern::parse("gyzqx"),
            Err(SolverError::InvalidFeedbackSymbol {
                symbol: 'z',
                position: 2
            })
        );
    }

    #[test]
    fn display_uses_canonical_symbols() {
        let pattern: FeedbackPattern = "G🟨-".parse().unwrap();
        assert_eq!(pattern.to_string(), "gyx");
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn is_solved_requires_all_correct() {
        assert!(FeedbackPattern::parse("ggggg").unwrap().is_solved());
        assert!(!FeedbackPattern::parse("ggggy").unwrap().is_solved());
        assert!(!FeedbackPattern::new(Vec::new()).is_solved());
    }

    #[test]
    fn between_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let pattern = FeedbackPattern::between(b"robot", b"floor");
        assert_eq!(pattern.marks(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn between_excess_copies_are_absent() {
        // SPEED vs ABIDE: only one E in the answer
        let pattern = FeedbackPattern::between(b"speed", b"abide");
        assert_eq!(pattern.marks(), &[Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn between_counts_past_u8_range() {
        let guess = "z".repeat(300);
        let target = format!("{}{}", "q".repeat(10), "z".repeat(290));
        let pattern = FeedbackPattern::between(guess.as_bytes(), target.as_bytes());

        let correct = pattern.marks().iter().filter(|&&m| m == Correct).count();
        assert_eq!(correct, 290);
        assert!(pattern.marks()[..10].iter().all(|&m| m == Absent));
    }

    #[test]
    fn between_identical_words_is_solved() {
        for word in [&b"crane"[..], b"aaaaa", b"llama"] {
            assert!(FeedbackPattern::between(word, word).is_solved());
        }
    }
}
