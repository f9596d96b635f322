//! Splitting a line of user input into a guess and its feedback

use crate::core::SolverError;

/// Split `line` into `(guess, feedback)`
///
/// Accepts the two parts separated by whitespace, `:` or `,`
/// (`"crane gyxxy"`, `"crane:gyxxy"`), or fused with any single separator
/// character between them (`"crane-gyxxy"`, `"crane/gyxxy"`). Lengths of the
/// parts are checked later by the constraint model.
///
/// # Errors
/// Returns `LengthMismatch` when the line is neither two parts nor a fused
/// pair of the expected total length.
///
/// # Examples
/// ```
/// use wordle_trie::commands::parse_round;
///
/// assert_eq!(
///     parse_round("crane gyxxy", 5).unwrap(),
///     ("crane".to_string(), "gyxxy".to_string())
/// );
/// assert_eq!(
///     parse_round("crane-gyxxy", 5).unwrap(),
///     ("crane".to_string(), "gyxxy".to_string())
/// );
/// ```
pub fn parse_round(line: &str, word_length: usize) -> Result<(String, String), SolverError> {
    let line = line.trim();

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if let [guess, feedback] = parts.as_slice() {
        return Ok(((*guess).to_string(), (*feedback).to_string()));
    }

    let chars: Vec<char> = line.chars().collect();
    let fused_length = 2 * word_length + 1;
    if parts.len() == 1 && chars.len() == fused_length {
        let guess = chars[..word_length].iter().collect();
        let feedback = chars[word_length + 1..].iter().collect();
        return Ok((guess, feedback));
    }

    Err(SolverError::LengthMismatch {
        expected: fused_length,
        actual: chars.len(),
    })
}
