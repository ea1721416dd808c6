//! Reachability oracle.
//!
//! Multi-source breadth-first search from each agent's goal row over the
//! wall-constrained grid. The result records, for every cell, how far the
//! goal row is and which way to step to get one cell closer. A state is
//! only ever accepted if both agents' own cells are reachable.

pub mod oracle;

pub use oracle::{has_path, DistanceField, PathCell, ReachabilityMap};
