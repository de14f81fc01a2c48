//! # Roadgraph
//!
//! Toll-road network modeling: systems/nodes with world coordinates,
//! bidirectional jumps/edges, declarative road construction (circular ring,
//! linear chain, branch, interchange splice), unweighted shortest-path
//! search, spatial queries, and JSON snapshot persistence.
//!
//! The library is the core behind a map front end: the renderer reads the
//! node/edge lists and issues route queries, the editor calls the mutation
//! surface, and the persistence layer swaps whole snapshots in and out.
//!
//! ## Example
//!
//! ```
//! use roadgraph::{atlas, NodeId, Router};
//!
//! let graph = atlas::default_atlas();
//! let router = Router::new(&graph);
//!
//! let route = router
//!     .shortest_path(&NodeId::from("101"), &NodeId::from("301"))
//!     .expect("the bundled atlas is connected");
//! assert!(route.len() > 2);
//! ```

pub mod core;

pub use crate::core::atlas;
pub use crate::core::builder::{self, RingSpec, RoadSpec};
pub use crate::core::error::{Error, Result};
pub use crate::core::graph::RoadGraph;
pub use crate::core::model::{Edge, Node, NodeId, TagStore};
pub use crate::core::persist::{self, MapSnapshot};
pub use crate::core::routes::{FreeSegments, Router};
pub use crate::core::spatial::{self, SpatialIndex};
pub use crate::core::validate;
