//! Outcast detection: the noun least related to the rest of a set.
//!
//! The outcast is the noun whose summed WordNet distance to every noun in the
//! set (itself included, at distance 0) is largest. The first noun to reach the
//! maximum wins ties.

use std::path::Path;

use rayon::prelude::*;

use crate::error::LexiconError;
use crate::wordnet::{LexiconResult, WordNet};

/// Outcast detector over a borrowed [`WordNet`].
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The noun in `nouns` with the largest summed distance to all of them.
    pub fn outcast<S: AsRef<str>>(&self, nouns: &[S]) -> LexiconResult<String> {
        let mut best: Option<(usize, &str)> = None;
        for noun in nouns {
            let noun = noun.as_ref();
            let total = self.total_distance(noun, nouns)?;
            if best.is_none_or(|(max, _)| total > max) {
                best = Some((total, noun));
            }
        }

        let (total, noun) = best.ok_or(LexiconError::EmptyQuery)?;
        tracing::debug!(nouns = nouns.len(), outcast = noun, total, "outcast query");
        Ok(noun.to_string())
    }

    /// Sum of distances from `noun` to every noun in `nouns`.
    pub fn total_distance<S: AsRef<str>>(&self, noun: &str, nouns: &[S]) -> LexiconResult<usize> {
        nouns
            .iter()
            .map(|other| self.wordnet.distance(noun, other.as_ref()))
            .sum()
    }

    /// Answer independent queries in parallel. Results keep the input order.
    pub fn outcast_batch<S>(&self, queries: &[Vec<S>]) -> Vec<LexiconResult<String>>
    where
        S: AsRef<str> + Sync,
    {
        queries.par_iter().map(|q| self.outcast(q)).collect()
    }
}

/// Split query text into whitespace-separated nouns.
pub fn parse_nouns(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Read a query file of whitespace-separated nouns.
pub fn read_nouns(path: &Path) -> LexiconResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_nouns(&text))
}
