//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Project configuration file name, looked up in the root directory
pub const CONFIG_FILE: &str = "campus-nav.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Record file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locations of the node and edge record files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Node records loaded at startup
    #[serde(default = "default_nodes")]
    pub nodes: String,

    /// Edge records loaded at startup
    #[serde(default = "default_edges")]
    pub edges: String,

    /// Target of `vertex export` and of `save` without arguments
    #[serde(default = "default_export_nodes")]
    pub export_nodes: String,

    /// Target of `edge export` and of `save` without arguments
    #[serde(default = "default_export_edges")]
    pub export_edges: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            edges: default_edges(),
            export_nodes: default_export_nodes(),
            export_edges: default_export_edges(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_nodes() -> String {
    "data/nodes.csv".to_string()
}

fn default_edges() -> String {
    "data/edges.csv".to_string()
}

fn default_export_nodes() -> String {
    "test_nodes.csv".to_string()
}

fn default_export_edges() -> String {
    "test_edges.csv".to_string()
}
