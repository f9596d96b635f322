//! Solving engine
//!
//! The constraint model built from feedback, the trie walk that enumerates
//! matching words, and a session type that ties them to a dictionary.

mod constraints;
mod enumerate;
mod session;

pub use constraints::ConstraintModel;
pub use enumerate::{count, enumerate, enumerate_parallel};
pub use session::{Round, Session};
