//! Domain layer: the building graph, input records, and sector bookkeeping.
//!
//! Everything here is synchronous and free of I/O.

pub mod graph;
pub mod model;
pub mod traits;
pub mod visited;
