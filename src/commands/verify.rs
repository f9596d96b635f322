//! Self-check over dictionary targets
//!
//! Plays every selected target word by always guessing the first remaining
//! candidate, scoring each guess with the game's feedback rules. A target
//! that drops out of its own candidate list would mean the constraint model
//! discarded a consistent word.

use crate::core::{FeedbackPattern, SolverError};
use crate::dictionary::Trie;
use crate::solver::{ConstraintModel, enumerate};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Which targets to play and for how long
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Play only the first N words (alphabetical)
    pub limit: Option<usize>,
    /// Play N words chosen at random; takes precedence over `limit`
    pub sample: Option<usize>,
    pub max_rounds: usize,
}

impl VerifyConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            sample: None,
            max_rounds: 6,
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How one target played out
#[derive(Debug, Clone)]
pub struct TargetOutcome {
    pub target: String,
    pub guesses: Vec<String>,
    pub solved: bool,
    /// The target vanished from the candidates
    pub lost: bool,
}

/// Aggregate results of a verify run
#[derive(Debug)]
pub struct VerifyStatistics {
    pub total: usize,
    pub solved: usize,
    pub unsolved: Vec<String>,
    pub lost: Vec<String>,
    pub round_distribution: FxHashMap<usize, usize>,
    pub average_rounds: f64,
    pub duration: Duration,
}

/// Pick the targets for a run from the full, sorted word list
#[must_use]
pub fn select_targets(words: &[String], config: &VerifyConfig) -> Vec<String> {
    if let Some(amount) = config.sample {
        let mut picked: Vec<String> = words
            .choose_multiple(&mut rand::rng(), amount)
            .cloned()
            .collect();
        picked.sort_unstable();
        return picked;
    }

    words
        .iter()
        .take(config.limit.unwrap_or(words.len()))
        .cloned()
        .collect()
}

/// Play a single target
///
/// # Errors
///
/// Propagates a validation error from the constraint model, which only
/// happens if `target` does not have the trie's word length.
pub fn play_target(
    trie: &Trie,
    target: &str,
    max_rounds: usize,
) -> Result<TargetOutcome, SolverError> {
    let mut model = ConstraintModel::new(trie.word_length());
    let mut outcome = TargetOutcome {
        target: target.to_string(),
        guesses: Vec::new(),
        solved: false,
        lost: false,
    };

    for _ in 0..max_rounds {
        let candidates = enumerate(trie, &model);
        if candidates
            .binary_search_by(|word| word.as_str().cmp(target))
            .is_err()
        {
            warn!(word = target, rounds = outcome.guesses.len(), "target left the candidates");
            outcome.lost = true;
            break;
        }

        let Some(guess) = candidates.into_iter().next() else {
            break;
        };
        let pattern = FeedbackPattern::between(guess.as_bytes(), target.as_bytes());
        model.apply(&guess, &pattern)?;
        outcome.guesses.push(guess);

        if pattern.is_solved() {
            outcome.solved = true;
            break;
        }
    }

    Ok(outcome)
}

/// Play the selected targets in parallel and summarize
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a target
/// fails validation.
pub fn run_verify(trie: &Trie, config: &VerifyConfig) -> Result<VerifyStatistics> {
    let all_words = enumerate(trie, &ConstraintModel::new(trie.word_length()));
    let targets = select_targets(&all_words, config);

    println!("🎯 Verifying {} targets...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes = targets
        .par_iter()
        .map(|target| {
            let outcome = play_target(trie, target, config.max_rounds);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let stats = summarize(&outcomes, start.elapsed());
    info!(
        total = stats.total,
        solved = stats.solved,
        lost = stats.lost.len(),
        "verify finished"
    );
    Ok(stats)
}

fn summarize(outcomes: &[TargetOutcome], duration: Duration) -> VerifyStatistics {
    let mut round_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut unsolved = Vec::new();
    let mut lost = Vec::new();
    let mut solved = 0;
    let mut solved_rounds = 0;

    for outcome in outcomes {
        if outcome.solved {
            solved += 1;
            solved_rounds += outcome.guesses.len();
            *round_distribution.entry(outcome.guesses.len()).or_insert(0) += 1;
        } else {
            unsolved.push(outcome.target.clone());
        }
        if outcome.lost {
            lost.push(outcome.target.clone());
        }
    }

    VerifyStatistics {
        total: outcomes.len(),
        solved,
        unsolved,
        lost,
        round_distribution,
        average_rounds: if solved > 0 {
            solved_rounds as f64 / solved as f64
        } else {
            0.0
        },
        duration,
    }
}
