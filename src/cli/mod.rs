//! CLI argument parsing for campus-nav
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --config, --nodes, --edges, --format, --quiet, --verbose

pub mod edge;
pub mod parse;
pub mod paths;
pub mod vertex;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use campus_nav_core::format::OutputFormat;
pub use edge::EdgeCommands;
pub use vertex::VertexCommands;

use parse::parse_format;

/// Campus Nav - routing and structure queries over a campus location graph
#[derive(Parser, Debug)]
#[command(name = "campus-nav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving config and data files
    #[arg(long, global = true, env = "CAMPUS_NAV_ROOT")]
    pub root: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Node records file (overrides config)
    #[arg(long, global = true)]
    pub nodes: Option<PathBuf>,

    /// Edge records file (overrides config)
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `campus_nav_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect and edit locations
    Vertex {
        #[command(subcommand)]
        command: VertexCommands,
    },

    /// Inspect and edit connections between locations
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },

    /// Check whether every location is reachable from every other
    Connected,

    /// Check for and construct Eulerian circuits and paths
    Euler {
        /// Start the circuit at this location (defaults to the first one)
        #[arg(long, short)]
        start: Option<String>,

        /// Also construct an open Eulerian path
        #[arg(long)]
        path: bool,
    },

    /// Shortest distance between two locations
    Distance {
        /// Starting location
        from: String,

        /// Destination location
        to: String,

        /// Show the locations walked
        #[arg(long, short)]
        trace: bool,
    },

    /// Shortest route visiting the given stops in order
    Route {
        /// Stops, in visiting order
        stops: Vec<String>,

        /// Show the locations walked
        #[arg(long, short)]
        trace: bool,
    },

    /// Minimum spanning tree of the campus graph
    Mst,

    /// Start an interactive command session
    Shell,

    /// Run a file of shell commands, one per line
    Batch {
        /// Command file
        file: PathBuf,
    },
}

impl Cli {
    /// Whether the command mutates the graph and should persist it
    pub fn is_mutating(&self) -> bool {
        match &self.command {
            Some(Commands::Vertex { command }) => command.is_mutating(),
            Some(Commands::Edge { command }) => command.is_mutating(),
            _ => false,
        }
    }
}
