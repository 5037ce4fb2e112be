//! A loaded graph together with where it came from and how to render it

use std::path::{Path, PathBuf};

use campus_nav_core::config::{resolve_path, NavConfig};
use campus_nav_core::error::Result;
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::{CampusGraph, VertexId};
use campus_nav_core::records;
use tracing::debug;

/// Resolved record file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Directory that relative paths are resolved against
    pub root: PathBuf,
    pub nodes: PathBuf,
    pub edges: PathBuf,
    pub export_nodes: PathBuf,
    pub export_edges: PathBuf,
}

impl DataPaths {
    /// Config paths relative to `root`, with CLI overrides for the inputs
    pub fn resolve(
        root: &Path,
        config: &NavConfig,
        nodes: Option<&Path>,
        edges: Option<&Path>,
    ) -> Self {
        let data = &config.data;
        Self {
            root: root.to_path_buf(),
            nodes: nodes
                .map(|p| resolve_path(root, p))
                .unwrap_or_else(|| data.nodes_path(root)),
            edges: edges
                .map(|p| resolve_path(root, p))
                .unwrap_or_else(|| data.edges_path(root)),
            export_nodes: data.export_nodes_path(root),
            export_edges: data.export_edges_path(root),
        }
    }

    /// Resolve a user-supplied path against the root
    pub fn rooted(&self, path: &Path) -> PathBuf {
        resolve_path(&self.root, path)
    }
}

pub struct Session {
    pub graph: CampusGraph,
    pub paths: DataPaths,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Session {
    pub fn open(paths: DataPaths, format: OutputFormat, quiet: bool) -> Result<Self> {
        let graph = records::load_graph(&paths.nodes, &paths.edges)?;
        Ok(Self {
            graph,
            paths,
            format,
            quiet,
        })
    }

    /// Replace the graph with a fresh copy of the record files.
    ///
    /// On failure the current graph is kept.
    pub fn reload(&mut self) -> Result<()> {
        self.graph = records::load_graph(&self.paths.nodes, &self.paths.edges)?;
        Ok(())
    }

    /// Write the graph back to the files it was loaded from
    pub fn persist(&self) -> Result<()> {
        records::write_nodes(&self.paths.nodes, &self.graph)?;
        records::write_edges(&self.paths.edges, &self.graph)?;
        debug!(nodes = %self.paths.nodes.display(), edges = %self.paths.edges.display(), "persist");
        Ok(())
    }

    /// Name of a vertex known to exist
    pub fn name(&self, id: VertexId) -> &str {
        &self.graph.vertices()[id].info.name
    }

    pub fn names(&self, ids: &[VertexId]) -> Vec<&str> {
        ids.iter().map(|&id| self.name(id)).collect()
    }

    /// Print a confirmation line, or its JSON form
    pub fn report(&self, message: &str, json: serde_json::Value) -> Result<()> {
        match self.format {
            OutputFormat::Json => super::print_json(&json),
            OutputFormat::Human | OutputFormat::Records => {
                if !self.quiet {
                    println!("{}", message);
                }
                Ok(())
            }
        }
    }
}
