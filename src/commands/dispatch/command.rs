//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::session::{DataPaths, Session};
use campus_nav_core::config::NavConfig;
use campus_nav_core::error::Result;

/// Load configuration and the graph it points at
pub fn open_session(cli: &Cli, root: &PathBuf) -> Result<Session> {
    let config = NavConfig::discover(root, cli.config.as_deref())?;
    let paths = DataPaths::resolve(root, &config, cli.nodes.as_deref(), cli.edges.as_deref());
    let format = cli.format.unwrap_or(config.output.format);
    Session::open(paths, format, cli.quiet)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn open_session(&self) -> Result<Session> {
        open_session(self.cli, self.root)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campus-nav {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Campus map navigation: routes, tours and spanning trees.");
        println!();
        println!("Run `campus-nav --help` for usage information.");
        Ok(())
    }
}
