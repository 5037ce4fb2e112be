//! Campus Nav Core Library
//!
//! Core graph store and algorithm suite for the campus-nav location graph.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
