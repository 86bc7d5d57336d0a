//! wordnet CLI: shortest ancestral paths, noun distances, and outcasts.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use wordnet_sap::config::WordNetConfig;
use wordnet_sap::error::GraphError;
use wordnet_sap::graph::Digraph;
use wordnet_sap::graph::sap::SapEngine;
use wordnet_sap::outcast::{Outcast, read_nouns};
use wordnet_sap::wordnet::WordNet;

#[derive(Parser)]
#[command(name = "wordnet", version, about = "Shortest ancestral paths over WordNet")]
struct Cli {
    /// Synset table (`id,nouns,gloss` per row).
    #[arg(long, global = true)]
    synsets: Option<PathBuf>,

    /// Hypernym table (`id,parent,...` per row).
    #[arg(long, global = true)]
    hypernyms: Option<PathBuf>,

    /// TOML config naming the two tables. Flags override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outcast of each query file as `<file>: <noun>`.
    Outcast {
        /// Files of whitespace-separated nouns.
        files: Vec<PathBuf>,
    },

    /// Length of the shortest ancestral path between two nouns.
    Distance { noun_a: String, noun_b: String },

    /// Common ancestor synset of two nouns on a shortest ancestral path.
    Sap { noun_a: String, noun_b: String },

    /// Check whether a word is a WordNet noun.
    IsNoun { word: String },

    /// List every noun.
    Nouns,

    /// Show index statistics.
    Info,

    /// Answer `v w` vertex pairs from stdin against a digraph file.
    Digraph {
        /// Digraph file: vertex count, edge count, then `v w` pairs.
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct OutcastReport {
    file: String,
    outcast: String,
}

#[derive(Serialize)]
struct VertexAnswer {
    v: usize,
    w: usize,
    length: Option<usize>,
    ancestor: Option<usize>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Outcast { files } => {
            let wordnet = load_wordnet(&cli)?;
            let queries = files
                .iter()
                .map(|f| read_nouns(f))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let answers = Outcast::new(&wordnet).outcast_batch(&queries);

            for (file, answer) in files.iter().zip(answers) {
                let report = OutcastReport {
                    file: file.display().to_string(),
                    outcast: answer?,
                };
                if cli.json {
                    println!("{}", serde_json::to_string(&report).into_diagnostic()?);
                } else {
                    println!("{}: {}", report.file, report.outcast);
                }
            }
        }

        Commands::Distance { noun_a, noun_b } => {
            let wordnet = load_wordnet(&cli)?;
            let distance = wordnet.distance(noun_a, noun_b)?;
            if cli.json {
                let value = serde_json::json!({
                    "noun_a": noun_a,
                    "noun_b": noun_b,
                    "distance": distance,
                });
                println!("{value}");
            } else {
                println!("{distance}");
            }
        }

        Commands::Sap { noun_a, noun_b } => {
            let wordnet = load_wordnet(&cli)?;
            let found = wordnet.ancestral_path(noun_a, noun_b)?;
            if cli.json {
                println!("{}", serde_json::to_string(&found).into_diagnostic()?);
            } else {
                println!("{}", found.label);
            }
        }

        Commands::IsNoun { word } => {
            let wordnet = load_wordnet(&cli)?;
            let known = wordnet.is_noun(word);
            if cli.json {
                println!("{}", serde_json::json!({ "word": word, "is_noun": known }));
            } else {
                println!("{known}");
            }
        }

        Commands::Nouns => {
            let wordnet = load_wordnet(&cli)?;
            if cli.json {
                let nouns: Vec<&str> = wordnet.nouns().collect();
                println!("{}", serde_json::to_string(&nouns).into_diagnostic()?);
            } else {
                for noun in wordnet.nouns() {
                    println!("{noun}");
                }
            }
        }

        Commands::Info => {
            let wordnet = load_wordnet(&cli)?;
            let info = wordnet.info();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
            } else {
                println!("{info}");
            }
        }

        Commands::Digraph { file } => {
            let graph = Digraph::from_file(file)?;
            let sap = SapEngine::new(&graph);

            let mut input = String::new();
            io::stdin().read_to_string(&mut input).into_diagnostic()?;

            for (v, w) in vertex_pairs(&graph, &input)? {
                let path = sap.query(v, w)?;
                if cli.json {
                    let answer = VertexAnswer {
                        v,
                        w,
                        length: path.map(|p| p.length),
                        ancestor: path.map(|p| p.ancestor),
                    };
                    println!("{}", serde_json::to_string(&answer).into_diagnostic()?);
                } else {
                    let (length, ancestor) = match path {
                        Some(p) => (p.length as i64, p.ancestor as i64),
                        None => (-1, -1),
                    };
                    println!("length = {length}, ancestor = {ancestor}");
                }
            }
        }
    }

    Ok(())
}

fn load_wordnet(cli: &Cli) -> Result<WordNet> {
    let config = match &cli.config {
        Some(path) => WordNetConfig::load(path)?,
        None => WordNetConfig::default(),
    };
    let config = config.with_overrides(cli.synsets.clone(), cli.hypernyms.clone());
    Ok(WordNet::from_config(&config)?)
}

/// Pair up whitespace-separated vertex ids, validating each against `graph`.
fn vertex_pairs(graph: &Digraph, input: &str) -> Result<Vec<(usize, usize)>> {
    let ids = input
        .split_whitespace()
        .map(|token| {
            let raw: i64 = token.parse().map_err(|_| GraphError::Malformed {
                message: format!("invalid vertex \"{token}\" on stdin"),
            })?;
            graph.vertex(raw)
        })
        .collect::<std::result::Result<Vec<usize>, GraphError>>()?;

    if ids.len() % 2 != 0 {
        miette::bail!("odd number of vertex ids on stdin; queries are `v w` pairs");
    }
    Ok(ids.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}
