//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, format_scope};
use crate::commands::{FilterResult, LookupResult, VerifyStatistics};
use crate::solver::ConstraintModel;
use colored::Colorize;

const COLUMNS: usize = 8;

/// Print the match count followed by the matches in columns
pub fn print_matches(matches: &[String]) {
    let noun = if matches.len() == 1 { "match" } else { "matches" };
    println!(
        "{} {noun}",
        matches.len().to_string().bright_yellow().bold()
    );
    for row in format_columns(matches, COLUMNS) {
        println!("  {row}");
    }
}

/// Print the allowed letters per position and the required letters
pub fn print_scope(model: &ConstraintModel) {
    for (i, scope) in model.scope().iter().enumerate() {
        let rendered = format_scope(*scope);
        let rendered = if scope.len() == 1 {
            rendered.green().bold()
        } else if scope.is_empty() {
            rendered.red()
        } else {
            rendered.normal()
        };
        println!("  {} {rendered}", format!("{}:", i + 1).bright_black());
    }

    if !model.required().is_empty() {
        println!(
            "  {} {}",
            "required:".bright_black(),
            model.required().to_string().yellow()
        );
    }
}

/// Print the result of a one-shot filter
pub fn print_filter_result(result: &FilterResult, count_only: bool) {
    if count_only {
        println!("{}", result.matches.len());
        return;
    }

    println!(
        "{}",
        format!("After {} round(s):", result.rounds_applied).cyan()
    );
    print_matches(&result.matches);
}

/// Print the result of a dictionary lookup
pub fn print_lookup_result(result: &LookupResult) {
    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".red() };

    println!("\n{}", result.word.to_uppercase().bright_yellow().bold());
    println!("  In dictionary:  {}", yes_no(result.in_dictionary));
    println!("  Prefix path:    {}", yes_no(result.is_prefix));
    println!("  Length matches: {}", yes_no(result.length_ok));
}

/// Print the statistics of a verify run
pub fn print_verify_statistics(stats: &VerifyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VERIFY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Targets played:   {}", stats.total);
    println!(
        "   Solved:           {}",
        format!("{}", stats.solved).green()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", stats.average_rounds).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.lost.is_empty() {
        println!(
            "   Soundness:        {}",
            "every target stayed a candidate".green()
        );
    } else {
        println!(
            "   Soundness:        {}",
            format!("{} target(s) lost: {}", stats.lost.len(), stats.lost.join(", "))
                .red()
                .bold()
        );
    }

    let mut rounds: Vec<_> = stats.round_distribution.iter().collect();
    rounds.sort_unstable();

    if !rounds.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (round, &count) in rounds {
            let pct = count as f64 / stats.total.max(1) as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {round:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !stats.unsolved.is_empty() {
        println!(
            "\n{} {}",
            "Unsolved within the round limit:".yellow(),
            stats.unsolved.join(", ")
        );
    }
}
