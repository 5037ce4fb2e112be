//! Command implementations for all campus-nav commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use campus_nav_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::commands::dispatch::data;
    use crate::commands::dispatch::macros::trace_command;
    use crate::commands::{analysis, route, shell};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let mut session = ctx.open_session()?;
        trace_command!(ctx.cli, ctx.start, "load_graph");

        match cmd {
            Commands::Vertex { command } => data::handle_vertex(&mut session, command)?,
            Commands::Edge { command } => data::handle_edge(&mut session, command)?,
            Commands::Connected => analysis::connected(&session)?,
            Commands::Euler { start, path } => {
                analysis::euler(&session, start.as_deref(), *path)?
            }
            Commands::Distance { from, to, trace } => {
                route::distance(&session, from, to, *trace)?
            }
            Commands::Route { stops, trace } => route::route(&session, stops, *trace)?,
            Commands::Mst => analysis::mst(&session)?,
            Commands::Shell => shell::run_interactive(&mut session)?,
            Commands::Batch { file } => {
                let file = session.paths.rooted(file);
                shell::run_batch(&mut session, &file)?
            }
        }

        if ctx.cli.is_mutating() {
            session.persist()?;
            trace_command!(ctx.cli, ctx.start, "persist");
        }

        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}
