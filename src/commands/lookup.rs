//! Dictionary lookup command

use crate::dictionary::Trie;

/// Membership details for one word
pub struct LookupResult {
    pub word: String,
    pub in_dictionary: bool,
    pub is_prefix: bool,
    pub length_ok: bool,
}

/// Look a word (or prefix) up in the dictionary
#[must_use]
pub fn lookup_word(trie: &Trie, word: &str) -> LookupResult {
    let word = word.trim().to_lowercase();
    LookupResult {
        in_dictionary: trie.contains(&word),
        is_prefix: trie.contains_prefix(&word),
        length_ok: word.chars().count() == trie.word_length(),
        word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_word_prefix_and_miss() {
        let (trie, _) = Trie::from_words(5, ["crane", "crate"]);

        let hit = lookup_word(&trie, "Crane");
        assert!(hit.in_dictionary && hit.is_prefix && hit.length_ok);
        assert_eq!(hit.word, "crane");

        let prefix = lookup_word(&trie, "cra");
        assert!(!prefix.in_dictionary && prefix.is_prefix && !prefix.length_ok);

        let miss = lookup_word(&trie, "slate");
        assert!(!miss.in_dictionary && !miss.is_prefix && miss.length_ok);
    }
}
