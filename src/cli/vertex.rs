//! Vertex subcommands

use clap::Subcommand;
use std::path::PathBuf;

/// Vertex subcommands
#[derive(Subcommand, Debug)]
pub enum VertexCommands {
    /// Show one location
    Show {
        /// Location name
        name: String,
    },

    /// List every location
    List,

    /// Add a location
    Add {
        /// Unique location name
        name: String,

        /// Category (e.g. library, canteen)
        category: String,

        /// Suggested visit duration in minutes
        minutes: u32,
    },

    /// Remove a location and every connection touching it
    Remove {
        /// Location name
        name: String,
    },

    /// Change the category and visit duration of a location
    Update {
        /// Location name
        name: String,

        /// New category
        category: String,

        /// New suggested visit duration in minutes
        minutes: u32,
    },

    /// Write all locations to a record file
    Export {
        /// Target file (defaults to the configured export path)
        path: Option<PathBuf>,
    },
}

impl VertexCommands {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            VertexCommands::Add { .. }
                | VertexCommands::Remove { .. }
                | VertexCommands::Update { .. }
        )
    }
}
