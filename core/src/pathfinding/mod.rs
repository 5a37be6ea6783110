pub mod bfs;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod strategy;

// Re-export the public types
pub use crate::pathfinding_config::SearchConfig;
pub use bfs::{PathFinder, SearchOutcome, SearchResult, SearchStats};
pub use explored::ExploredSet;
pub use frontier::{Frontier, RemovalPolicy};
pub use node::{NodeArena, NodeId, PathStep, SearchNode};
pub use strategy::Strategy;
