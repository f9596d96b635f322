//! Core domain types
//!
//! Letters, letter sets, feedback and the shared error type. Nothing here
//! depends on the dictionary or the solver.

mod error;
mod feedback;
mod letters;
mod word;

pub use error::SolverError;
pub use feedback::{Feedback, FeedbackPattern};
pub use letters::{LetterSet, Letters};
pub use word::{ALPHABET_SIZE, letter_index, parse_letters};
