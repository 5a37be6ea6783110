pub mod dataset;
pub mod error;
pub mod loading;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod resolution;
pub mod string_normalization;

// Re-export commonly used items
pub use dataset::{Dataset, DatasetBuilder, Movie, MovieId, Person, PersonId};
pub use error::{FrontierError, LoadError, ResolveError};
pub use loading::{LoadReport, load_dataset};
pub use pathfinding::{
    ExploredSet, Frontier, NodeArena, NodeId, PathFinder, PathStep, RemovalPolicy, SearchConfig,
    SearchNode, SearchOutcome, SearchResult, SearchStats, Strategy,
};
pub use resolution::{choose_candidate, resolve_person};
