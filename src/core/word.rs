//! Word validation
//!
//! Words and guesses are handled as lowercase ASCII bytes. Validation happens
//! once, up front, so the trie and the constraint model can index by letter
//! without further checks.

use super::SolverError;

/// Number of letters in the alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// Zero-based alphabet index of a lowercase ASCII letter
///
/// # Panics
/// Panics in debug mode if `letter` is not in `a..=z`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be in a..=z");
    (letter - b'a') as usize
}

/// Validate `text` as a word of exactly `word_length` letters
///
/// Uppercase ASCII letters are folded to lowercase. The length is checked
/// before the letters, so a word that is both too long and malformed reports
/// `LengthMismatch`.
///
/// # Errors
/// - `LengthMismatch` if `text` does not have `word_length` characters
/// - `InvalidLetter` if any character is not an ASCII letter
///
/// # Examples
/// ```
/// use wordle_trie::core::{parse_letters, SolverError};
///
/// assert_eq!(parse_letters("Crane", 5).unwrap(), b"crane".to_vec());
/// assert_eq!(
///     parse_letters("cran", 5),
///     Err(SolverError::LengthMismatch { expected: 5, actual: 4 })
/// );
/// ```
pub fn parse_letters(text: &str, word_length: usize) -> Result<Vec<u8>, SolverError> {
    let actual = text.chars().count();
    if actual != word_length {
        return Err(SolverError::LengthMismatch {
            expected: word_length,
            actual,
        });
    }

    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            if ch.is_ascii_alphabetic() {
                Ok(ch.to_ascii_lowercase() as u8)
            } else {
                Err(SolverError::InvalidLetter {
                    letter: ch,
                    position,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_letters_lowercases() {
        assert_eq!(parse_letters("CrAnE", 5).unwrap(), b"crane".to_vec());
    }

    #[test]
    fn parse_letters_counts_characters_not_bytes() {
        // 'é' is two bytes but one character
        assert_eq!(
            parse_letters("caf\u{e9}s", 5),
            Err(SolverError::InvalidLetter {
                letter: '\u{e9}',
                position: 3
            })
        );
    }

    #[test]
    fn parse_letters_length_checked_first() {
        assert_eq!(
            parse_letters("ab3", 5),
            Err(SolverError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn parse_letters_rejects_digits_and_spaces() {
        assert!(matches!(
            parse_letters("cran3", 5),
            Err(SolverError::InvalidLetter {
                letter: '3',
                position: 4
            })
        ));
        assert!(parse_letters("cr ne", 5).is_err());
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), 0);
        assert_eq!(letter_index(b'z'), ALPHABET_SIZE - 1);
    }
}
