use crate::pathfinding::Strategy;

/// Configuration for the path search
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Frontier discipline; breadth-first is the only one that yields shortest paths
    pub strategy: Strategy,
    /// Give up after expanding this many people (unbounded when `None`)
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new(strategy: Strategy, max_expansions: Option<usize>) -> Self {
        Self {
            strategy,
            max_expansions,
        }
    }
}
