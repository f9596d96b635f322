//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Render a position scope, `·` when nothing is left
#[must_use]
pub fn format_scope(scope: LetterSet) -> String {
    match scope.len() {
        0 => "·".to_string(),
        26 => "*".to_string(),
        _ => scope.to_string(),
    }
}

/// Lay words out in rows of `columns`, each row space separated
#[must_use]
pub fn format_columns(words: &[String], columns: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| row.join("  "))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_rendering() {
        assert_eq!(format_scope(LetterSet::EMPTY), "·");
        assert_eq!(format_scope(LetterSet::FULL), "*");
        assert_eq!(format_scope(LetterSet::single(b'q')), "q");
        assert_eq!(format_scope(LetterSet::FULL.without(b'a')).len(), 25);
    }

    #[test]
    fn columns_wrap() {
        let words: Vec<String> = ["crane", "slate", "irate"].map(String::from).to_vec();
        assert_eq!(format_columns(&words, 2), vec!["crane  slate", "irate"]);
        assert_eq!(format_columns(&words, 0).len(), 3);
        assert!(format_columns(&[], 4).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
