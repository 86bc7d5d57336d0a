//! The lexical index: nouns to synsets, synsets to labels, and the hypernym DAG.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::WordNetConfig;
use crate::error::{LexiconError, WordNetResult};
use crate::graph::Digraph;
use crate::graph::sap::{AncestralPath, SapEngine};
use crate::graph::validate::ensure_rooted_dag;

use super::LexiconResult;
use super::parse::{parse_hypernyms, parse_synsets};

/// The common ancestor of two nouns on a shortest ancestral path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonAncestor {
    pub synset: usize,
    pub label: String,
    pub distance: usize,
}

/// Summary statistics of a built index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexInfo {
    pub synsets: usize,
    pub hypernym_edges: usize,
    pub nouns: usize,
    pub root: usize,
    pub root_label: String,
}

impl fmt::Display for IndexInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "synsets:        {}", self.synsets)?;
        writeln!(f, "hypernym edges: {}", self.hypernym_edges)?;
        writeln!(f, "nouns:          {}", self.nouns)?;
        write!(f, "root:           {} ({})", self.root_label, self.root)
    }
}

/// WordNet lexical index over a validated rooted DAG.
///
/// Built once from a synset table and a hypernym table, immutable afterwards.
/// A noun that belongs to several synsets is queried with all of them as
/// sources.
#[derive(Debug, Clone)]
pub struct WordNet {
    /// noun -> every synset containing it
    synsets: BTreeMap<String, BTreeSet<usize>>,
    labels: Vec<String>,
    glosses: Vec<Option<String>>,
    root: usize,
    sap: SapEngine,
}

impl WordNet {
    /// Build the index from table contents.
    pub fn from_strs(synsets: &str, hypernyms: &str) -> LexiconResult<Self> {
        let rows = parse_synsets(synsets)?;
        let count = rows.len();

        let mut labels: Vec<Option<String>> = vec![None; count];
        let mut glosses: Vec<Option<String>> = vec![None; count];
        let mut nouns: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();

        for row in rows {
            if row.id >= count {
                return Err(LexiconError::NonContiguous { id: row.id, count });
            }
            if labels[row.id].is_some() {
                return Err(LexiconError::MalformedRow {
                    table: "synset",
                    line: row.line,
                    message: format!("duplicate synset id {}", row.id),
                });
            }
            for noun in row.nouns {
                nouns.entry(noun).or_default().insert(row.id);
            }
            labels[row.id] = Some(row.label);
            glosses[row.id] = row.gloss;
        }
        // Unique ids that are all below `count` cover 0..count exactly.
        let labels: Vec<String> = labels.into_iter().flatten().collect();

        let mut graph = Digraph::new(count);
        for row in parse_hypernyms(hypernyms)? {
            let v = graph.vertex(row.id)?;
            for parent in row.parents {
                let w = graph.vertex(parent)?;
                graph.add_edge(v, w)?;
            }
        }

        let root = ensure_rooted_dag(&graph)?;

        tracing::info!(
            synsets = count,
            edges = graph.edge_count(),
            nouns = nouns.len(),
            root = %labels[root],
            "built WordNet index"
        );

        Ok(Self {
            synsets: nouns,
            labels,
            glosses,
            root,
            sap: SapEngine::from_graph(graph),
        })
    }

    /// Build the index from a synset file and a hypernym file.
    pub fn from_files(synsets: &Path, hypernyms: &Path) -> LexiconResult<Self> {
        let synsets = read_table(synsets)?;
        let hypernyms = read_table(hypernyms)?;
        Self::from_strs(&synsets, &hypernyms)
    }

    /// Build the index from the table paths in `config`.
    pub fn from_config(config: &WordNetConfig) -> WordNetResult<Self> {
        let (synsets, hypernyms) = config.tables()?;
        Ok(Self::from_files(synsets, hypernyms)?)
    }

    /// Every distinct noun, in lexicographic order. Call again to restart.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.synsets.keys().map(String::as_str)
    }

    pub fn noun_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn synset_count(&self) -> usize {
        self.labels.len()
    }

    /// Whether `word` is a noun of this index. Matching is exact.
    pub fn is_noun(&self, word: &str) -> bool {
        self.synsets.contains_key(word)
    }

    /// Synsets containing `noun`.
    pub fn synsets(&self, noun: &str) -> LexiconResult<&BTreeSet<usize>> {
        self.synsets
            .get(noun)
            .ok_or_else(|| LexiconError::UnknownNoun {
                noun: noun.to_string(),
            })
    }

    /// Label (the joined noun field) of a synset.
    pub fn label(&self, synset: usize) -> Option<&str> {
        self.labels.get(synset).map(String::as_str)
    }

    pub fn gloss(&self, synset: usize) -> Option<&str> {
        self.glosses.get(synset).and_then(|g| g.as_deref())
    }

    /// Length of the shortest ancestral path between any synset of `noun_a`
    /// and any synset of `noun_b`.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> LexiconResult<usize> {
        Ok(self.ancestral_path(noun_a, noun_b)?.distance)
    }

    /// Label of the common ancestor on a shortest ancestral path between the
    /// two nouns.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> LexiconResult<&str> {
        let found = self.common_ancestor(noun_a, noun_b)?;
        Ok(&self.labels[found.ancestor])
    }

    /// Ancestor id, label, and distance in one query.
    pub fn ancestral_path(&self, noun_a: &str, noun_b: &str) -> LexiconResult<CommonAncestor> {
        let found = self.common_ancestor(noun_a, noun_b)?;
        Ok(CommonAncestor {
            synset: found.ancestor,
            label: self.labels[found.ancestor].clone(),
            distance: found.length,
        })
    }

    fn common_ancestor(
        &self,
        noun_a: &str,
        noun_b: &str,
    ) -> LexiconResult<AncestralPath> {
        let a = self.synsets(noun_a)?;
        let b = self.synsets(noun_b)?;
        self.sap
            .query_sets(a.iter().copied(), b.iter().copied())?
            .ok_or_else(|| LexiconError::NoCommonAncestor {
                a: noun_a.to_string(),
                b: noun_b.to_string(),
            })
    }

    /// The unique synset without hypernyms.
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn graph(&self) -> &Digraph {
        self.sap.graph()
    }

    pub fn info(&self) -> IndexInfo {
        IndexInfo {
            synsets: self.synset_count(),
            hypernym_edges: self.graph().edge_count(),
            nouns: self.noun_count(),
            root: self.root,
            root_label: self.labels[self.root].clone(),
        }
    }
}

fn read_table(path: &Path) -> LexiconResult<String> {
    std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, GraphError};

    const SYNSETS: &str = include_str!("../../tests/data/synsets.txt");
    const HYPERNYMS: &str = include_str!("../../tests/data/hypernyms.txt");

    fn wordnet() -> WordNet {
        WordNet::from_strs(SYNSETS, HYPERNYMS).unwrap()
    }

    #[test]
    fn builds_index() {
        let wn = wordnet();
        assert_eq!(wn.synset_count(), 16);
        assert_eq!(wn.noun_count(), 27);
        assert_eq!(wn.graph().edge_count(), 15);
        assert_eq!(wn.root(), 0);
        assert_eq!(wn.label(6), Some("animal animate_being beast"));
        assert_eq!(
            wn.gloss(14),
            Some("a piece of furniture having a smooth flat top, usually supported by legs")
        );
    }

    #[test]
    fn nouns_are_sorted_and_restartable() {
        let wn = wordnet();
        let first: Vec<&str> = wn.nouns().collect();
        let second: Vec<&str> = wn.nouns().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 27);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(first.iter().filter(|n| **n == "table").count(), 1);
    }

    #[test]
    fn is_noun_is_exact() {
        let wn = wordnet();
        assert!(wn.is_noun("dog"));
        assert!(wn.is_noun("domestic_dog"));
        assert!(!wn.is_noun("Dog"));
        assert!(!wn.is_noun("domestic dog"));
        assert!(!wn.is_noun(""));
    }

    #[test]
    fn ambiguous_noun_maps_to_every_synset() {
        let wn = wordnet();
        let senses: Vec<usize> = wn.synsets("table").unwrap().iter().copied().collect();
        assert_eq!(senses, vec![14, 15]);
    }

    #[test]
    fn distance_and_sap() {
        let wn = wordnet();
        assert_eq!(wn.distance("dog", "cat").unwrap(), 2);
        assert_eq!(wn.sap("dog", "cat").unwrap(), "animal animate_being beast");
        assert_eq!(wn.distance("dog", "tree").unwrap(), 4);
        assert_eq!(wn.sap("dog", "tree").unwrap(), "organism being");
        assert_eq!(wn.distance("dog", "mile").unwrap(), 9);
        assert_eq!(wn.sap("dog", "mile").unwrap(), "entity");
    }

    #[test]
    fn synonyms_share_a_synset() {
        let wn = wordnet();
        assert_eq!(wn.distance("dog", "domestic_dog").unwrap(), 0);
        assert_eq!(wn.sap("beast", "animal").unwrap(), "animal animate_being beast");
    }

    #[test]
    fn every_sense_is_considered() {
        let wn = wordnet();
        // table/tabular_array is closer to mile than table/furniture_table.
        let found = wn.ancestral_path("table", "mile").unwrap();
        assert_eq!(found.synset, 2);
        assert_eq!(found.label, "abstraction abstract_entity");
        assert_eq!(found.distance, 3);

        assert_eq!(wn.distance("table", "dog").unwrap(), 5);
        assert_eq!(wn.sap("table", "dog").unwrap(), "object physical_object");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let wn = wordnet();
        for noun in wn.nouns() {
            assert_eq!(wn.distance(noun, noun).unwrap(), 0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let wn = wordnet();
        let nouns: Vec<&str> = wn.nouns().collect();
        for a in &nouns {
            for b in &nouns {
                assert_eq!(wn.distance(a, b).unwrap(), wn.distance(b, a).unwrap());
            }
        }
    }

    #[test]
    fn unknown_noun_rejected() {
        let wn = wordnet();
        for err in [
            wn.distance("dog", "unicorn").unwrap_err(),
            wn.sap("unicorn", "dog").unwrap_err(),
        ] {
            assert!(matches!(err, LexiconError::UnknownNoun { ref noun } if noun == "unicorn"));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn two_roots_rejected() {
        let err = WordNet::from_strs("0,a\n1,b\n2,c\n", "2,0\n").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Graph(GraphError::RootCount { count: 2, .. })
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn cycle_rejected() {
        let err = WordNet::from_strs("0,a\n1,b\n2,c\n", "1,0\n2,1\n1,2\n").unwrap_err();
        assert!(matches!(err, LexiconError::Graph(GraphError::Cycle { .. })));
    }

    #[test]
    fn out_of_range_hypernym_rejected() {
        let err = WordNet::from_strs("0,a\n1,b\n", "1,2\n").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Graph(GraphError::VertexOutOfRange { vertex: 2, .. })
        ));
        let err = WordNet::from_strs("0,a\n1,b\n", "1,-1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_hypernym_field_fails_construction() {
        let err = WordNet::from_strs("0,a\n1,b\n2,c\n", "1,0\n2,,1\n").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MalformedRow {
                table: "hypernym",
                line: 2,
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn synset_ids_must_be_contiguous() {
        let err = WordNet::from_strs("0,a\n2,b\n", "2,0\n").unwrap_err();
        assert!(matches!(err, LexiconError::NonContiguous { id: 2, count: 2 }));

        let err = WordNet::from_strs("0,a\n0,b\n", "").unwrap_err();
        assert!(matches!(err, LexiconError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn rows_may_arrive_out_of_order() {
        let wn = WordNet::from_strs("1,b\n0,a\n", "1,0\n").unwrap();
        assert_eq!(wn.label(0), Some("a"));
        assert_eq!(wn.sap("a", "b").unwrap(), "a");
    }

    #[test]
    fn info_reports_root() {
        let info = wordnet().info();
        assert_eq!(info.root_label, "entity");
        assert_eq!(info.synsets, 16);
        assert!(info.to_string().contains("entity (0)"));
    }
}
