//! WordNet lexical index.
//!
//! Parses the synset and hypernym tables, validates that the hypernym graph is
//! a rooted DAG, and answers noun-level distance and common-ancestor queries
//! through the [`SapEngine`](crate::graph::sap::SapEngine).

pub mod index;
pub mod parse;

pub use index::{CommonAncestor, IndexInfo, WordNet};

use crate::error::LexiconError;

/// Result type for lexicon operations.
pub type LexiconResult<T> = std::result::Result<T, LexiconError>;
