//! Shortest distance and multi-stop route commands

use campus_nav_core::error::Result;
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::{
    shortest_distance, shortest_path_with_trace, topological_route, topological_shortest_path,
    Distance,
};
use serde_json::json;

use super::session::Session;
use super::{format_walk, print_json};

/// Rendered form of a missing distance in line-oriented output
const UNREACHABLE: &str = "-1";

fn render(distance: Option<Distance>) -> String {
    distance.map_or_else(|| UNREACHABLE.to_string(), |d| d.to_string())
}

pub fn distance(session: &Session, from: &str, to: &str, trace: bool) -> Result<()> {
    let graph = &session.graph;
    let (distance, walk) = if trace {
        match shortest_path_with_trace(graph, from, to)? {
            Some(route) => (Some(route.distance), session.names(&route.vertices)),
            None => (None, Vec::new()),
        }
    } else {
        (shortest_distance(graph, from, to)?, Vec::new())
    };

    match session.format {
        OutputFormat::Human => match distance {
            Some(d) => {
                println!("Shortest distance from {} to {}: {}", from, to, d);
                if trace {
                    println!("Path: {}", format_walk(&walk));
                }
            }
            None => println!("{} and {} are not connected (distance -1)", from, to),
        },
        OutputFormat::Json => {
            let mut value = json!({
                "from": from,
                "to": to,
                "reachable": distance.is_some(),
                "distance": distance,
            });
            if trace {
                value["path"] = json!(walk);
            }
            print_json(&value)?;
        }
        OutputFormat::Records => {
            println!("{},{},{}", from, to, render(distance));
            if !walk.is_empty() {
                println!("path,{}", walk.join(","));
            }
        }
    }
    Ok(())
}

/// Shortest route visiting `stops` in the given order
pub fn route(session: &Session, stops: &[String], trace: bool) -> Result<()> {
    let graph = &session.graph;
    let (distance, walk) = if trace {
        match topological_route(graph, stops)? {
            Some(route) => (Some(route.distance), session.names(&route.vertices)),
            None => (None, Vec::new()),
        }
    } else {
        (topological_shortest_path(graph, stops)?, Vec::new())
    };

    match session.format {
        OutputFormat::Human => match distance {
            Some(d) => {
                println!("Route length: {}", d);
                if !walk.is_empty() {
                    println!("Path: {}", format_walk(&walk));
                }
            }
            None => println!("Route is not reachable (distance -1)"),
        },
        OutputFormat::Json => {
            let mut value = json!({
                "stops": stops,
                "reachable": distance.is_some(),
                "distance": distance,
            });
            if trace {
                value["path"] = json!(walk);
            }
            print_json(&value)?;
        }
        OutputFormat::Records => {
            println!("route,{}", render(distance));
            if !walk.is_empty() {
                println!("path,{}", walk.join(","));
            }
        }
    }
    Ok(())
}
