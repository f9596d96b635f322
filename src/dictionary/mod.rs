//! Dictionary index
//!
//! An arena-backed prefix tree holding the fixed-length word list.

mod trie;

pub use trie::{LoadReport, NodeId, Trie};
