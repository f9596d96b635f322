//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_filter_result, print_lookup_result, print_matches, print_scope,
    print_verify_statistics,
};
