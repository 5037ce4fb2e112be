pub mod analysis;
pub mod dispatch;
pub mod edge;
pub mod route;
pub mod session;
pub mod shell;
pub mod vertex;

use campus_nav_core::error::Result;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Join location names into a walk, e.g. `Gate -> Lab -> Hall`
pub fn format_walk(names: &[&str]) -> String {
    names.join(" -> ")
}
