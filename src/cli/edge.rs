//! Edge subcommands

use clap::Subcommand;
use std::path::PathBuf;

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Show the distance of one connection
    Show {
        /// One endpoint
        from: String,

        /// The other endpoint
        to: String,
    },

    /// List every connection, shortest first
    List,

    /// Connect two locations
    Add {
        /// One endpoint
        from: String,

        /// The other endpoint
        to: String,

        /// Travel distance
        weight: u32,
    },

    /// Remove a connection
    Remove {
        /// One endpoint
        from: String,

        /// The other endpoint
        to: String,
    },

    /// Change the distance of a connection
    Update {
        /// One endpoint
        from: String,

        /// The other endpoint
        to: String,

        /// New travel distance
        weight: u32,
    },

    /// Write all connections to a record file
    Export {
        /// Target file (defaults to the configured export path)
        path: Option<PathBuf>,
    },
}

impl EdgeCommands {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            EdgeCommands::Add { .. } | EdgeCommands::Remove { .. } | EdgeCommands::Update { .. }
        )
    }
}
