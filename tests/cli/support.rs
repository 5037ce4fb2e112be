use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Four locations on a cycle with one long chord:
/// Gate-Library 1, Library-Canteen 2, Canteen-Dorm 1, Dorm-Gate 1, Gate-Canteen 5
pub const NODES: &str = "\
Gate,entrance,5
Library,study,60
Canteen,food,30
Dorm,housing,0
";

pub const EDGES: &str = "\
Gate,Library,1
Library,Canteen,2
Canteen,Dorm,1
Dorm,Gate,1
Gate,Canteen,5
";

/// Get a Command for campus-nav
pub fn campus_nav() -> Command {
    cargo_bin_cmd!("campus-nav")
}

/// A root directory holding `data/nodes.csv` and `data/edges.csv`
pub struct Campus {
    dir: TempDir,
}

impl Campus {
    pub fn new() -> Self {
        Self::with_records(NODES, EDGES)
    }

    pub fn with_records(nodes: &str, edges: &str) -> Self {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("nodes.csv"), nodes).unwrap();
        fs::write(data.join("edges.csv"), edges).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn write(&self, relative: &str, content: &str) {
        fs::write(self.path(relative), content).unwrap();
    }

    /// A command rooted here, isolated from any per-user config
    pub fn cmd(&self) -> Command {
        let mut cmd = campus_nav();
        cmd.current_dir(self.root())
            .env("CAMPUS_NAV_CONFIG_DIR", self.path("global"))
            .env_remove("RUST_LOG")
            .env_remove("CAMPUS_NAV_LOG")
            .arg("--root")
            .arg(self.root());
        cmd
    }
}

/// Parse stdout of a finished command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
