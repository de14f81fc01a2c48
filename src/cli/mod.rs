//! CLI-specific utilities for roadgraph
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod report;

pub use report::{render_node_info, render_route, render_stats};
