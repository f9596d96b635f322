//! Command implementations

pub mod filter;
pub mod lookup;
mod round;
pub mod simple;
pub mod verify;

pub use filter::{FilterResult, filter_words};
pub use lookup::{LookupResult, lookup_word};
pub use round::parse_round;
pub use simple::run_simple;
pub use verify::{VerifyConfig, VerifyStatistics, run_verify};
