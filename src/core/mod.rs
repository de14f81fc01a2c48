//! Core library modules for roadgraph
//!
//! This module contains the internal implementation details of the
//! roadgraph library.

pub mod atlas;
pub mod builder;
pub mod error;
pub mod graph;
pub mod model;
pub mod persist;
pub mod routes;
pub mod spatial;
pub mod validate;

// Re-export main types for internal use
pub use error::{Error, Result};
pub use graph::RoadGraph;
pub use routes::{FreeSegments, Router};
