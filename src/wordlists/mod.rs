//! Word lists
//!
//! An embedded default dictionary plus a loader for word list files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
