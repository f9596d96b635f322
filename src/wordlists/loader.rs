//! Word list loading utilities
//!
//! Reads one word per line. Validation against the configured word length is
//! left to the trie, which reports every rejected line.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_trie::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Split word list text into normalized entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let words = parse_word_list("  Crane\nSLATE  \r\nirate\n");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_skips_blank_lines_and_comments() {
        let words = parse_word_list("# five letter words\n\ncrane\n   \n#slate\nirate");
        assert_eq!(words, vec!["crane", "irate"]);
    }

    #[test]
    fn parse_keeps_wrong_lengths_for_the_trie_to_reject() {
        let words = parse_word_list("crane\ntoolong\nab");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
