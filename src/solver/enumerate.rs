//! Constrained enumeration over the dictionary trie
//!
//! A depth-first walk that only follows edges whose letter is still in scope
//! for the current position. Each branch carries its own copy of the letters
//! it still has to place; a word is accepted when that set is empty at the
//! terminal node.

use crate::core::LetterSet;
use crate::dictionary::{NodeId, Trie};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, warn};

use super::ConstraintModel;

struct Walker<'a> {
    trie: &'a Trie,
    scope: &'a [LetterSet],
}

impl Walker<'_> {
    /// Visit every matching word below `node`, in alphabetical order
    ///
    /// `path` holds the letters leading to `node` and is restored before
    /// returning. `pending` is passed by value, so sibling branches never see
    /// each other's consumption.
    fn walk<F: FnMut(&[u8])>(
        &self,
        node: NodeId,
        path: &mut Vec<u8>,
        pending: LetterSet,
        visit: &mut F,
    ) {
        if self.trie.is_word(node) {
            if pending.is_empty() {
                visit(path.as_slice());
            }
            return;
        }

        let Some(&allowed) = self.scope.get(path.len()) else {
            return;
        };

        for letter in allowed {
            if let Some(child) = self.trie.child(node, letter) {
                path.push(letter);
                self.walk(child, path, pending.without(letter), visit);
                path.pop();
            }
        }
    }
}

/// A model built for another word length matches nothing in this trie
fn lengths_agree(trie: &Trie, model: &ConstraintModel) -> bool {
    if trie.word_length() == model.word_length() {
        return true;
    }
    warn!(
        trie_length = trie.word_length(),
        model_length = model.word_length(),
        "constraint model does not fit the dictionary"
    );
    false
}

fn to_word(path: &[u8]) -> String {
    path.iter().copied().map(char::from).collect()
}

/// All dictionary words consistent with `model`, in ascending order
///
/// An empty position scope or an empty dictionary simply yields no words, as
/// does a model whose word length differs from the trie's.
///
/// # Examples
/// ```
/// use wordle_trie::dictionary::Trie;
/// use wordle_trie::solver::{ConstraintModel, enumerate};
///
/// let (trie, _) = Trie::from_words(5, ["slate", "crane", "crate", "irate"]);
/// let mut model = ConstraintModel::new(5);
/// model.apply_feedback("grate", "xgggg").unwrap();
///
/// assert_eq!(enumerate(&trie, &model), vec!["crate", "irate"]);
/// ```
#[must_use]
pub fn enumerate(trie: &Trie, model: &ConstraintModel) -> Vec<String> {
    if !lengths_agree(trie, model) {
        return Vec::new();
    }
    let start = Instant::now();
    let walker = Walker {
        trie,
        scope: model.scope(),
    };

    let mut matches = Vec::new();
    let mut path = Vec::with_capacity(model.word_length());
    walker.walk(NodeId::ROOT, &mut path, model.required(), &mut |word: &[u8]| {
        matches.push(to_word(word));
    });

    debug!(
        matches = matches.len(),
        elapsed_us = start.elapsed().as_micros(),
        "enumerated candidates"
    );
    matches
}

/// Number of words [`enumerate`] would return, without building them
#[must_use]
pub fn count(trie: &Trie, model: &ConstraintModel) -> usize {
    if !lengths_agree(trie, model) {
        return 0;
    }
    let walker = Walker {
        trie,
        scope: model.scope(),
    };

    let mut total = 0;
    let mut path = Vec::with_capacity(model.word_length());
    walker.walk(NodeId::ROOT, &mut path, model.required(), &mut |_: &[u8]| {
        total += 1;
    });
    total
}

/// Same result as [`enumerate`], split across first-letter partitions
///
/// Each partition is walked on the rayon pool with its own path buffer and
/// its own pending set; the trie is only read. Partitions are concatenated in
/// letter order, so the output order is identical to the sequential walk.
#[must_use]
pub fn enumerate_parallel(trie: &Trie, model: &ConstraintModel) -> Vec<String> {
    if !lengths_agree(trie, model) {
        return Vec::new();
    }
    let Some(&first) = model.scope().first() else {
        return enumerate(trie, model);
    };
    if trie.is_word(NodeId::ROOT) {
        return enumerate(trie, model);
    }

    let start = Instant::now();
    let walker = Walker {
        trie,
        scope: model.scope(),
    };

    let branches: Vec<(u8, NodeId)> = first
        .iter()
        .filter_map(|letter| trie.child(NodeId::ROOT, letter).map(|child| (letter, child)))
        .collect();

    let partitions: Vec<Vec<String>> = branches
        .par_iter()
        .map(|&(letter, child)| {
            let mut found = Vec::new();
            let mut path = Vec::with_capacity(model.word_length());
            path.push(letter);
            walker.walk(
                child,
                &mut path,
                model.required().without(letter),
                &mut |word: &[u8]| found.push(to_word(word)),
            );
            found
        })
        .collect();

    let matches = partitions.concat();
    debug!(
        matches = matches.len(),
        partitions = branches.len(),
        elapsed_us = start.elapsed().as_micros(),
        "enumerated candidates in parallel"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 5] = ["abcde", "after", "altef", "birto", "axaya"];

    fn sample_trie() -> Trie {
        Trie::from_words(5, SAMPLE).0
    }

    #[test]
    fn unconstrained_lists_whole_dictionary_sorted() {
        let trie = sample_trie();
        let model = ConstraintModel::new(5);

        let words = enumerate(&trie, &model);
        assert_eq!(words, vec!["abcde", "after", "altef", "axaya", "birto"]);
        assert_eq!(count(&trie, &model), 5);
    }

    #[test]
    fn end_to_end_absent_purge() {
        let trie = sample_trie();
        let mut model = ConstraintModel::new(5);
        model.apply_feedback("afxgh", "gxxxx").unwrap();

        assert_eq!(model.scope()[0], LetterSet::single(b'a'));
        for allowed in model.scope() {
            for letter in *b"fxgh" {
                assert!(!allowed.contains(letter));
            }
        }
        assert!(model.required().is_empty());

        // "after" and "altef" contain 'f', "axaya" contains 'x'
        assert_eq!(enumerate(&trie, &model), vec!["abcde"]);
    }

    #[test]
    fn required_letters_filter_matches() {
        let trie = sample_trie();
        let mut model = ConstraintModel::new(5);
        // 't' somewhere, but not at position 0
        model.apply_feedback("tzzzz", "yxxxx").unwrap();

        let words = enumerate(&trie, &model);
        assert_eq!(words, vec!["after", "altef", "birto"]);
        assert!(words.iter().all(|w| w.contains('t')));
    }

    #[test]
    fn required_letter_consumed_once_per_branch() {
        // the 'e' placed on the "ae" branch must be pending again on "ax"
        let (trie, _) = Trie::from_words(3, ["aeb", "axb", "bea"]);
        let mut model = ConstraintModel::new(3);
        model.apply_feedback("ezz", "yxx").unwrap();

        assert_eq!(enumerate(&trie, &model), vec!["aeb", "bea"]);
    }

    #[test]
    fn duplicate_insertion_listed_once() {
        let (trie, _) = Trie::from_words(5, ["crane", "crane", "slate"]);
        let model = ConstraintModel::new(5);
        assert_eq!(enumerate(&trie, &model), vec!["crane", "slate"]);
    }

    #[test]
    fn empty_scope_yields_nothing() {
        let trie = sample_trie();
        let mut model = ConstraintModel::new(5);
        model.apply_feedback("azzzz", "gxxxx").unwrap();
        model.apply_feedback("azzzz", "xxxxx").unwrap();

        assert!(model.is_unsatisfiable());
        assert!(enumerate(&trie, &model).is_empty());
        assert!(enumerate_parallel(&trie, &model).is_empty());
        assert_eq!(count(&trie, &model), 0);
    }

    #[test]
    fn model_of_other_length_matches_nothing() {
        let (trie, _) = Trie::from_words(5, ["crane"]);
        let mut longer = ConstraintModel::new(6);
        longer.apply_feedback("zzzzzy", "xxxxxg").unwrap();

        assert!(enumerate(&trie, &longer).is_empty());
        assert!(enumerate_parallel(&trie, &longer).is_empty());
        assert_eq!(count(&trie, &longer), 0);

        let shorter = ConstraintModel::new(4);
        assert!(enumerate(&trie, &shorter).is_empty());
        assert_eq!(count(&trie, &shorter), 0);
    }

    #[test]
    fn empty_dictionary_yields_nothing() {
        let trie = Trie::new(5);
        let model = ConstraintModel::new(5);
        assert!(enumerate(&trie, &model).is_empty());
    }

    #[test]
    fn output_is_strictly_ascending() {
        let words = [
            "zesty", "apple", "mango", "maple", "amble", "zebra", "crane", "crate",
        ];
        let (trie, _) = Trie::from_words(5, words);
        let mut model = ConstraintModel::new(5);
        model.apply_feedback("eqqqq", "yxxxx").unwrap();

        let found = enumerate(&trie, &model);
        assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(found.len(), 7);
    }

    #[test]
    fn parallel_matches_sequential() {
        let words = [
            "crane", "crate", "slate", "irate", "grate", "floor", "robot", "speed", "erase",
            "abbey",
        ];
        let (trie, _) = Trie::from_words(5, words);

        let mut model = ConstraintModel::new(5);
        assert_eq!(enumerate_parallel(&trie, &model), enumerate(&trie, &model));

        model.apply_feedback("tares", "yxyxy").unwrap();
        assert_eq!(enumerate_parallel(&trie, &model), enumerate(&trie, &model));
    }

    #[test]
    fn results_agree_with_admits() {
        let words = ["crane", "crate", "slate", "irate", "grate", "trace", "react"];
        let (trie, _) = Trie::from_words(5, words);
        let mut model = ConstraintModel::new(5);
        model.apply_feedback("caret", "yyyyx").unwrap();

        let found = enumerate(&trie, &model);
        let expected: Vec<&str> = {
            let mut admitted: Vec<&str> =
                words.iter().copied().filter(|w| model.admits(w)).collect();
            admitted.sort_unstable();
            admitted
        };
        assert_eq!(found, expected);
    }
}
