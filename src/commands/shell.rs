//! Line-oriented command interpreter shared by `shell` and `batch`
//!
//! Each line is one command. Mutations stay in memory until `save`.
//! A failing line is reported and the session carries on.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use campus_nav_core::bail_usage;
use campus_nav_core::error::{NavError, Result};
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::{LocationInfo, Weight};
use tracing::{debug, warn};

use super::session::Session;
use super::{analysis, edge, route, vertex};

const PROMPT: &str = "campus-nav> ";

pub const HELP: &str = "\
Commands:
  vertex get NAME                      show a location
  vertex list                          list all locations
  vertex add NAME CATEGORY MINUTES     add a location
  vertex remove NAME                   remove a location and its connections
  vertex update NAME CATEGORY MINUTES  change category and visit time
  edge get FROM TO                     show a connection
  edge list                            list all connections
  edge add FROM TO WEIGHT              connect two locations
  edge remove FROM TO                  remove a connection
  edge update FROM TO WEIGHT           change a connection's length
  connected                            check whether every location is reachable
  euler [START]                        Euler circuit, starting at START if given
  eulerpath                            Euler path (open trail)
  distance FROM TO                     shortest distance
  path FROM TO                         shortest distance with the walk
  route STOP...                        shortest route visiting stops in order
  mst                                  minimum spanning tree
  reload                               re-read the data files
  save [NODES EDGES]                   write the graph (default: export paths)
  help                                 show this list
  quit | exit                          leave";

/// One parsed interpreter line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    VertexGet(String),
    VertexList,
    VertexAdd(LocationInfo),
    VertexRemove(String),
    VertexUpdate(LocationInfo),
    EdgeGet(String, String),
    EdgeList,
    EdgeAdd(String, String, Weight),
    EdgeRemove(String, String),
    EdgeUpdate(String, String, Weight),
    Connected,
    Euler(Option<String>),
    EulerPath,
    Distance(String, String),
    Path(String, String),
    Route(Vec<String>),
    Mst,
    Reload,
    Save(Option<(PathBuf, PathBuf)>),
    Help,
    Quit,
}

fn parse_number(context: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| NavError::invalid_value(context, value))
}

impl FromStr for ShellCommand {
    type Err = NavError;

    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let command = match tokens.as_slice() {
            ["vertex", "get", name] => ShellCommand::VertexGet(name.to_string()),
            ["vertex", "list"] => ShellCommand::VertexList,
            ["vertex", "add", name, category, minutes] => ShellCommand::VertexAdd(
                LocationInfo::new(*name, *category, parse_number("minutes", minutes)?),
            ),
            ["vertex", "remove", name] => ShellCommand::VertexRemove(name.to_string()),
            ["vertex", "update", name, category, minutes] => ShellCommand::VertexUpdate(
                LocationInfo::new(*name, *category, parse_number("minutes", minutes)?),
            ),
            ["edge", "get", from, to] => ShellCommand::EdgeGet(from.to_string(), to.to_string()),
            ["edge", "list"] => ShellCommand::EdgeList,
            ["edge", "add", from, to, weight] => ShellCommand::EdgeAdd(
                from.to_string(),
                to.to_string(),
                parse_number("weight", weight)?,
            ),
            ["edge", "remove", from, to] => {
                ShellCommand::EdgeRemove(from.to_string(), to.to_string())
            }
            ["edge", "update", from, to, weight] => ShellCommand::EdgeUpdate(
                from.to_string(),
                to.to_string(),
                parse_number("weight", weight)?,
            ),
            ["connected"] => ShellCommand::Connected,
            ["euler"] => ShellCommand::Euler(None),
            ["euler", start] => ShellCommand::Euler(Some(start.to_string())),
            ["eulerpath"] => ShellCommand::EulerPath,
            ["distance", from, to] => ShellCommand::Distance(from.to_string(), to.to_string()),
            ["path", from, to] => ShellCommand::Path(from.to_string(), to.to_string()),
            ["route", stops @ ..] => {
                ShellCommand::Route(stops.iter().map(|s| s.to_string()).collect())
            }
            ["mst"] => ShellCommand::Mst,
            ["reload"] => ShellCommand::Reload,
            ["save"] => ShellCommand::Save(None),
            ["save", nodes, edges] => {
                ShellCommand::Save(Some((PathBuf::from(nodes), PathBuf::from(edges))))
            }
            ["help"] => ShellCommand::Help,
            ["quit"] | ["exit"] => ShellCommand::Quit,
            [] => bail_usage!("empty command"),
            _ => bail_usage!(format!(
                "unrecognized command: {} (type `help` for a list)",
                line.trim()
            )),
        };
        Ok(command)
    }
}

/// Whether the interpreter keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn execute(session: &mut Session, command: ShellCommand) -> Result<Flow> {
    debug!(?command, "shell_command");
    match command {
        ShellCommand::VertexGet(name) => vertex::show(session, &name)?,
        ShellCommand::VertexList => vertex::list(session)?,
        ShellCommand::VertexAdd(info) => vertex::add(session, info)?,
        ShellCommand::VertexRemove(name) => vertex::remove(session, &name)?,
        ShellCommand::VertexUpdate(info) => {
            vertex::update(session, &info.name, &info.category, info.visit_minutes)?
        }
        ShellCommand::EdgeGet(from, to) => edge::show(session, &from, &to)?,
        ShellCommand::EdgeList => edge::list(session)?,
        ShellCommand::EdgeAdd(from, to, weight) => edge::add(session, &from, &to, weight)?,
        ShellCommand::EdgeRemove(from, to) => edge::remove(session, &from, &to)?,
        ShellCommand::EdgeUpdate(from, to, weight) => edge::update(session, &from, &to, weight)?,
        ShellCommand::Connected => analysis::connected(session)?,
        ShellCommand::Euler(start) => analysis::euler(session, start.as_deref(), false)?,
        ShellCommand::EulerPath => analysis::euler(session, None, true)?,
        ShellCommand::Distance(from, to) => route::distance(session, &from, &to, false)?,
        ShellCommand::Path(from, to) => route::distance(session, &from, &to, true)?,
        ShellCommand::Route(stops) => route::route(session, &stops, true)?,
        ShellCommand::Mst => analysis::mst(session)?,
        ShellCommand::Reload => {
            session.reload()?;
            session.report(
                &format!(
                    "Reloaded {} location(s) and {} connection(s)",
                    session.graph.vertex_count(),
                    session.graph.edge_count()
                ),
                serde_json::json!({
                    "action": "reloaded",
                    "vertices": session.graph.vertex_count(),
                    "edges": session.graph.edge_count(),
                }),
            )?;
        }
        ShellCommand::Save(targets) => {
            let (nodes, edges) = match targets {
                Some((nodes, edges)) => {
                    (session.paths.rooted(&nodes), session.paths.rooted(&edges))
                }
                None => (
                    session.paths.export_nodes.clone(),
                    session.paths.export_edges.clone(),
                ),
            };
            vertex::export(session, &nodes)?;
            edge::export(session, &edges)?;
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Run one raw input line. Blank lines and `#` comments are skipped.
pub fn run_line(session: &mut Session, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }
    let command = line.parse::<ShellCommand>()?;
    execute(session, command)
}

fn report_failure(session: &Session, location: Option<usize>, err: &NavError) {
    if session.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
        return;
    }
    match location {
        Some(line) => eprintln!("error: line {}: {}", line, err),
        None => eprintln!("error: {}", err),
    }
}

/// Read commands from stdin until `quit` or end of input
pub fn run_interactive(session: &mut Session) -> Result<()> {
    let show_prompt = session.format == OutputFormat::Human && !session.quiet;
    if show_prompt {
        println!("campus-nav shell. Type `help` for commands, `quit` to leave.");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        if show_prompt {
            print!("{}", PROMPT);
            stdout.flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match run_line(session, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => report_failure(session, None, &e),
        }
    }
    Ok(())
}

/// Run every line of a command file, reporting failures by line number
pub fn run_batch(session: &mut Session, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .map_err(|e| NavError::io_operation("read", path.display(), e))?;

    let mut failures = 0usize;
    for (idx, line) in content.lines().enumerate() {
        match run_line(session, line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                failures += 1;
                report_failure(session, Some(idx + 1), &e);
            }
        }
    }

    if failures > 0 {
        warn!(failures, path = %path.display(), "batch finished with failed commands");
    }
    Ok(())
}
