//! Wordle Trie - CLI
//!
//! Word-guessing game filter with TUI and CLI modes. Feedback rounds narrow a
//! per-position constraint model; a pruned trie walk lists the words left.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::FmtSubscriber;
use wordle_trie::{
    commands::{VerifyConfig, filter_words, lookup_word, run_simple, run_verify},
    dictionary::Trie,
    output::{print_filter_result, print_lookup_result, print_verify_statistics},
    solver::Session,
    wordlists::{DICTIONARY, loader::load_from_file},
};

const MAX_WORD_LENGTH: usize = 15;

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Filter a dictionary by word-guessing game feedback using a pruned trie walk",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length the dictionary and every guess must have
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enumerate matches in parallel
    #[arg(long, global = true)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-oriented mode without TUI
    Simple,

    /// Apply feedback rounds and print the matching words
    Filter {
        /// Rounds as guess:feedback, e.g. crane:xgyxx
        #[arg(required = true)]
        rounds: Vec<String>,

        /// Print only the number of matches
        #[arg(short, long)]
        count: bool,
    },

    /// Check whether a word or prefix is in the dictionary
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Play dictionary words as targets and check no target is ever lost
    Verify {
        /// Play only the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Play N random words
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Give up on a target after this many guesses
        #[arg(short, long, default_value_t = 6)]
        max_rounds: usize,
    },
}

fn init_logging(verbose: u8, tui: bool) -> Result<()> {
    let level = match (tui, verbose) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Build the trie from the -w source
///
/// - "embedded": the built-in five-letter dictionary
/// - "<path>": one word per line; words of the wrong length are skipped
fn load_dictionary(wordlist: &str, length: usize) -> Result<Trie> {
    let mut trie = Trie::new(length);

    let report = if wordlist == "embedded" {
        trie.populate(DICTIONARY)
    } else {
        let words = load_from_file(wordlist)
            .with_context(|| format!("failed to read word list '{wordlist}'"))?;
        trie.populate(&words)
    };

    if trie.is_empty() {
        warn!(
            wordlist,
            length,
            rejected = report.rejected.len(),
            "dictionary has no words of this length"
        );
    }

    Ok(trie)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(1..=MAX_WORD_LENGTH).contains(&cli.length) {
        bail!(
            "word length must be between 1 and {MAX_WORD_LENGTH}, got {}",
            cli.length
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play))?;

    let trie = load_dictionary(&cli.wordlist, cli.length)?;

    match command {
        Commands::Play => run_play_command(trie, cli.parallel),
        Commands::Simple => run_simple_command(trie, cli.parallel),
        Commands::Filter { rounds, count } => {
            run_filter_command(trie, cli.parallel, &rounds, count)
        }
        Commands::Lookup { word } => {
            print_lookup_result(&lookup_word(&trie, &word));
            Ok(())
        }
        Commands::Verify {
            limit,
            sample,
            max_rounds,
        } => {
            let config = VerifyConfig {
                limit,
                sample,
                max_rounds,
            };
            let stats = run_verify(&trie, &config)?;
            print_verify_statistics(&stats);
            if !stats.lost.is_empty() {
                bail!("{} target(s) dropped out of their candidates", stats.lost.len());
            }
            Ok(())
        }
    }
}

fn run_filter_command(trie: Trie, parallel: bool, rounds: &[String], count: bool) -> Result<()> {
    let mut session = Session::new(trie).with_parallel(parallel);
    let result = filter_words(&mut session, rounds)?;
    print_filter_result(&result, count);
    Ok(())
}

fn run_simple_command(trie: Trie, parallel: bool) -> Result<()> {
    let mut session = Session::new(trie).with_parallel(parallel);
    run_simple(&mut session)
}

fn run_play_command(trie: Trie, parallel: bool) -> Result<()> {
    use wordle_trie::interactive::{App, run_tui};

    let app = App::new(Session::new(trie).with_parallel(parallel));
    run_tui(app)
}
