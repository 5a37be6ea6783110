use super::explored::ExploredSet;
use super::frontier::{Frontier, RemovalPolicy};
use super::node::{NodeArena, PathStep, SearchNode};
use crate::dataset::{Dataset, PersonId};
use crate::error::FrontierError;
use crate::pathfinding_config::SearchConfig;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Hops from start to goal; empty when start and goal are the same person.
    Found(Vec<PathStep>),
    NotConnected,
    /// The expansion budget ran out while the frontier still had nodes.
    Aborted,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub nodes_generated: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn path(&self) -> Option<&[PathStep]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path.as_slice()),
            _ => None,
        }
    }

    /// Number of movie links between the two people, if they are connected.
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(|path| path.len())
    }
}

/// Runs path searches against a borrowed, read-only dataset.
pub struct PathFinder<'a> {
    dataset: &'a Dataset,
    config: SearchConfig,
}

impl<'a> PathFinder<'a> {
    pub fn new(dataset: &'a Dataset, config: SearchConfig) -> Self {
        Self { dataset, config }
    }

    /// Finds the shortest chain of co-stars linking `start` to `goal`.
    ///
    /// The goal test runs when a node is generated, so the first goal node
    /// seen under the FIFO frontier sits at minimum depth. With a
    /// depth-first strategy the path is valid but may be longer.
    pub fn shortest_path(&self, start: &PersonId, goal: &PersonId) -> SearchResult {
        let search_timer = Instant::now();
        let policy = self.config.strategy.removal_policy();
        let mut search_state = SearchState::new(start.clone(), policy);

        let outcome = if start == goal {
            SearchOutcome::Found(vec![])
        } else {
            search_state.find_path_to_goal(goal, self.dataset, self.config.max_expansions)
        };

        let stats = SearchStats {
            nodes_expanded: search_state.nodes_expanded,
            nodes_generated: search_state.nodes_generated,
            duration: search_timer.elapsed(),
        };

        debug!(
            start = %start,
            goal = %goal,
            strategy = self.config.strategy.as_str(),
            expanded = stats.nodes_expanded,
            generated = stats.nodes_generated,
            "search finished: {:?}",
            outcome
        );

        SearchResult { outcome, stats }
    }
}

struct SearchState {
    frontier: Frontier,
    explored: ExploredSet,
    arena: NodeArena,
    nodes_expanded: usize,
    nodes_generated: usize,
}

impl SearchState {
    fn new(start: PersonId, policy: RemovalPolicy) -> Self {
        let mut frontier = Frontier::new(policy);
        frontier.add(SearchNode::root(start));

        Self {
            frontier,
            explored: ExploredSet::new(),
            arena: NodeArena::new(),
            nodes_expanded: 0,
            nodes_generated: 1,
        }
    }

    fn budget_exhausted(&self, max_expansions: Option<usize>) -> bool {
        max_expansions.is_some_and(|limit| self.nodes_expanded >= limit)
    }

    fn find_path_to_goal(
        &mut self,
        goal: &PersonId,
        dataset: &Dataset,
        max_expansions: Option<usize>,
    ) -> SearchOutcome {
        loop {
            if !self.frontier.is_empty() && self.budget_exhausted(max_expansions) {
                return SearchOutcome::Aborted;
            }

            let current = match self.frontier.remove() {
                Ok(node) => node,
                Err(FrontierError::Empty) => return SearchOutcome::NotConnected,
            };

            let current_state = current.state.clone();
            self.explored.add(current_state.clone());
            let current_id = self.arena.insert(current);
            self.nodes_expanded += 1;

            for (movie, person) in dataset.neighbors(&current_state) {
                if self.explored.contains_state(&person) || self.frontier.contains_state(&person) {
                    continue;
                }

                let child = SearchNode::child(person, current_id, movie);
                self.nodes_generated += 1;

                if &child.state == goal {
                    return SearchOutcome::Found(self.arena.path_to(&child));
                }

                self.frontier.add(child);
            }
        }
    }
}
