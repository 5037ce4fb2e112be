//! Handlers for vertex and edge subcommands

use crate::cli::{EdgeCommands, VertexCommands};
use crate::commands::session::Session;
use crate::commands::{edge, vertex};
use campus_nav_core::error::Result;
use campus_nav_core::graph::LocationInfo;

pub(super) fn handle_vertex(session: &mut Session, command: &VertexCommands) -> Result<()> {
    match command {
        VertexCommands::Show { name } => vertex::show(session, name),
        VertexCommands::List => vertex::list(session),
        VertexCommands::Add {
            name,
            category,
            minutes,
        } => vertex::add(session, LocationInfo::new(name, category, *minutes)),
        VertexCommands::Remove { name } => vertex::remove(session, name),
        VertexCommands::Update {
            name,
            category,
            minutes,
        } => vertex::update(session, name, category, *minutes),
        VertexCommands::Export { path } => {
            let target = match path {
                Some(p) => session.paths.rooted(p),
                None => session.paths.export_nodes.clone(),
            };
            vertex::export(session, &target)
        }
    }
}

pub(super) fn handle_edge(session: &mut Session, command: &EdgeCommands) -> Result<()> {
    match command {
        EdgeCommands::Show { from, to } => edge::show(session, from, to),
        EdgeCommands::List => edge::list(session),
        EdgeCommands::Add { from, to, weight } => edge::add(session, from, to, *weight),
        EdgeCommands::Remove { from, to } => edge::remove(session, from, to),
        EdgeCommands::Update { from, to, weight } => edge::update(session, from, to, *weight),
        EdgeCommands::Export { path } => {
            let target = match path {
                Some(p) => session.paths.rooted(p),
                None => session.paths.export_edges.clone(),
            };
            edge::export(session, &target)
        }
    }
}
