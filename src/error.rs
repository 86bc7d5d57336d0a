//! Rich diagnostic error types for the WordNet SAP engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly which input was
//! rejected and why. Every error also reports an [`ErrorKind`], which is the
//! coarse taxonomy callers branch on.

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of every error the crate raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Absent, out-of-range, empty, or unknown input passed to a query.
    InvalidArgument,
    /// The hypernym graph is cyclic or does not have exactly one root.
    InvalidGraph,
    /// An input file or string could not be parsed.
    Malformed,
    /// A filesystem operation failed.
    Io,
}

/// Top-level error type for the crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum WordNetError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl WordNetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Graph(e) => e.kind(),
            Self::Lexicon(e) => e.kind(),
            Self::Config(e) => e.kind(),
        }
    }
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("vertex {vertex} is not between 0 and {}", .vertex_count.saturating_sub(1))]
    #[diagnostic(
        code(wordnet::graph::vertex_out_of_range),
        help(
            "Vertex ids must satisfy 0 <= id < V. This graph has {vertex_count} \
             vertices; check the id against the synset table."
        )
    )]
    VertexOutOfRange { vertex: i64, vertex_count: usize },

    #[error("empty source set")]
    #[diagnostic(
        code(wordnet::graph::empty_sources),
        help("An ancestral query needs at least one source vertex on each side.")
    )]
    EmptySources,

    #[error("hypernym graph has a directed cycle through vertex {vertex}")]
    #[diagnostic(
        code(wordnet::graph::cycle),
        help(
            "A WordNet hypernym graph must be acyclic. Follow the hypernym rows \
             starting at synset {vertex} to find the edge that loops back."
        )
    )]
    Cycle { vertex: usize },

    #[error("hypernym graph has {count} roots {roots:?}, expected exactly one")]
    #[diagnostic(
        code(wordnet::graph::root_count),
        help(
            "Exactly one synset may have no hypernyms. Add hypernym rows for the \
             extra roots, or give the table a single top-level synset."
        )
    )]
    RootCount { count: usize, roots: Vec<usize> },

    #[error("malformed digraph input: {message}")]
    #[diagnostic(
        code(wordnet::graph::malformed),
        help(
            "A digraph file is the vertex count, the edge count, then one \
             `v w` pair per edge, all separated by whitespace."
        )
    )]
    Malformed { message: String },

    #[error("failed to read digraph file: {path}")]
    #[diagnostic(
        code(wordnet::graph::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexOutOfRange { .. } | Self::EmptySources => ErrorKind::InvalidArgument,
            Self::Cycle { .. } | Self::RootCount { .. } => ErrorKind::InvalidGraph,
            Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

// ---------------------------------------------------------------------------
// Lexicon errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LexiconError {
    #[error("\"{noun}\" is not a WordNet noun")]
    #[diagnostic(
        code(wordnet::lexicon::unknown_noun),
        help(
            "Nouns are matched exactly, including case and underscores. \
             List the known nouns with `wordnet nouns`."
        )
    )]
    UnknownNoun { noun: String },

    #[error("no common ancestor for \"{a}\" and \"{b}\"")]
    #[diagnostic(
        code(wordnet::lexicon::no_common_ancestor),
        help(
            "Every synset of a rooted DAG reaches the root, so this indicates a \
             corrupted index. Rebuild it from the source tables."
        )
    )]
    NoCommonAncestor { a: String, b: String },

    #[error("outcast query is empty")]
    #[diagnostic(
        code(wordnet::lexicon::empty_query),
        help("Provide at least one noun to the outcast detector.")
    )]
    EmptyQuery,

    #[error("{table} table, line {line}: {message}")]
    #[diagnostic(
        code(wordnet::lexicon::malformed_row),
        help(
            "Synset rows are `id,noun1 noun2 ...,gloss` and hypernym rows are \
             `id,parent1,parent2,...`, with non-negative integer ids."
        )
    )]
    MalformedRow {
        table: &'static str,
        line: usize,
        message: String,
    },

    #[error("synset ids are not contiguous: id {id} with {count} rows")]
    #[diagnostic(
        code(wordnet::lexicon::non_contiguous),
        help("Synset ids must run from 0 to N-1 where N is the number of rows.")
    )]
    NonContiguous { id: usize, count: usize },

    #[error("failed to read {path}")]
    #[diagnostic(
        code(wordnet::lexicon::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

impl LexiconError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownNoun { .. } | Self::EmptyQuery => ErrorKind::InvalidArgument,
            Self::NoCommonAncestor { .. } => ErrorKind::InvalidGraph,
            Self::MalformedRow { .. } | Self::NonContiguous { .. } => ErrorKind::Malformed,
            Self::Io { .. } => ErrorKind::Io,
            Self::Graph(e) => e.kind(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(wordnet::config::read),
        help("Ensure the config file exists and is valid TOML.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(wordnet::config::parse),
        help("Check the TOML syntax: {message}")
    )]
    Parse { path: String, message: String },

    #[error("no {which} table given")]
    #[diagnostic(
        code(wordnet::config::missing_input),
        help("Pass --{which} <path> or set `{which}` in the config file.")
    )]
    MissingInput { which: &'static str },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Malformed,
            Self::MissingInput { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenience alias for functions returning crate-level results.
pub type WordNetResult<T> = std::result::Result<T, WordNetError>;
