//! Wordle Trie
//!
//! A word-guessing game filter: dictionary words live in a trie, feedback
//! rounds narrow a per-position constraint model, and a pruned walk of the
//! trie lists every word that still fits.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_trie::dictionary::Trie;
//! use wordle_trie::solver::{ConstraintModel, enumerate};
//!
//! let (trie, _report) = Trie::from_words(5, ["crane", "slate", "irate", "grate"]);
//!
//! let mut model = ConstraintModel::new(5);
//! model.apply_feedback("plate", "xxggg").unwrap();
//!
//! assert_eq!(enumerate(&trie, &model), ["grate", "irate"]);
//! ```

// Core domain types
pub mod core;

// Trie storage
pub mod dictionary;

// Constraint model and enumeration
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
