// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # wordnet-sap
//!
//! Shortest ancestral path (SAP) queries over WordNet's noun hypernym DAG, and
//! the lexical tools built on them.
//!
//! ## Architecture
//!
//! - **Graph store** (`graph`): petgraph-backed digraph over vertices `0..V`
//! - **SAP engine** (`graph::sap`): dual multi-source BFS over an owned graph copy
//! - **Lexical index** (`wordnet`): noun ↔ synset maps over a validated rooted DAG
//! - **Outcast detector** (`outcast`): the noun least related to the others
//!
//! ## Library usage
//!
//! ```no_run
//! use std::path::Path;
//! use wordnet_sap::outcast::Outcast;
//! use wordnet_sap::wordnet::WordNet;
//!
//! let wordnet = WordNet::from_files(
//!     Path::new("synsets.txt"),
//!     Path::new("hypernyms.txt"),
//! )
//! .unwrap();
//! let d = wordnet.distance("horse", "zebra").unwrap();
//! let ancestor = wordnet.sap("horse", "zebra").unwrap();
//! println!("{d} via {ancestor}");
//!
//! let odd = Outcast::new(&wordnet).outcast(&["horse", "zebra", "cat", "table"]).unwrap();
//! println!("outcast: {odd}");
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod wordnet;
