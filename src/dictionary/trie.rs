//! Prefix tree over fixed-length words
//!
//! Nodes live in a single arena owned by the trie and refer to each other by
//! index. Nodes are only ever appended, so an index stays valid for the life
//! of the trie.

use crate::core::{ALPHABET_SIZE, SolverError, letter_index, parse_letters};
use tracing::{info, warn};

/// Stable handle to a node in a [`Trie`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie
    pub const ROOT: Self = Self(0);
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    is_word: bool,
}

/// Dictionary of words that all share one configured length
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_length: usize,
    word_count: usize,
}

/// Outcome of loading a batch of words into a [`Trie`]
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Words that were new to the trie
    pub inserted: usize,
    /// Valid words that were already present
    pub duplicates: usize,
    /// Words that failed validation, with the reason
    pub rejected: Vec<(String, SolverError)>,
}

impl LoadReport {
    /// Number of words examined
    #[must_use]
    pub fn total(&self) -> usize {
        self.inserted + self.duplicates + self.rejected.len()
    }
}

impl Trie {
    /// Create an empty trie for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_length,
            word_count: 0,
        }
    }

    /// Build a trie from a word list, skipping words that fail validation
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::dictionary::Trie;
    ///
    /// let (trie, report) = Trie::from_words(5, ["crane", "slate", "toolong"]);
    /// assert_eq!(trie.len(), 2);
    /// assert_eq!(report.rejected.len(), 1);
    /// assert!(trie.contains("slate"));
    /// ```
    pub fn from_words<I, S>(word_length: usize, words: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new(word_length);
        let report = trie.populate(words);
        (trie, report)
    }

    /// Insert a word, returning `true` if it was not already present
    ///
    /// The word is validated in full before any node is created, so a
    /// rejected word leaves the trie unchanged.
    ///
    /// # Errors
    /// - `LengthMismatch` if the word is not exactly the configured length
    /// - `InvalidLetter` if the word contains a character outside `a..=z`
    pub fn insert(&mut self, word: &str) -> Result<bool, SolverError> {
        let letters = parse_letters(word, self.word_length)?;

        let mut node = NodeId::ROOT;
        for letter in letters {
            node = match self.child(node, letter) {
                Some(child) => child,
                None => self.push_child(node, letter),
            };
        }

        let terminal = &mut self.nodes[node.0];
        if terminal.is_word {
            return Ok(false);
        }
        terminal.is_word = true;
        self.word_count += 1;
        Ok(true)
    }

    /// Insert every word, continuing past rejected ones
    pub fn populate<I, S>(&mut self, words: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();

        for word in words {
            let word = word.as_ref();
            match self.insert(word) {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.duplicates += 1,
                Err(err) => {
                    warn!(word, %err, "skipping dictionary word");
                    report.rejected.push((word.to_string(), err));
                }
            }
        }

        info!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            rejected = report.rejected.len(),
            nodes = self.nodes.len(),
            "dictionary loaded"
        );

        report
    }

    /// Whether `word` is a complete dictionary word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.is_word(node))
    }

    /// Whether `prefix` spells a path from the root
    ///
    /// Every dictionary word is also a prefix of itself, and the empty string
    /// is a prefix of everything.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Child of `node` along `letter`, if one exists
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node.0].children[letter_index(letter)]
    }

    /// Whether `node` terminates a dictionary word
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_word
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the arena, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push_child(&mut self, parent: NodeId, letter: u8) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.nodes[parent.0].children[letter_index(letter)] = Some(id);
        id
    }

    fn find(&self, text: &str) -> Option<NodeId> {
        text.chars().try_fold(NodeId::ROOT, |node, ch| {
            if ch.is_ascii_alphabetic() {
                self.child(node, ch.to_ascii_lowercase() as u8)
            } else {
                None
            }
        })
    }
}
