use super::node::SearchNode;
use crate::dataset::PersonId;
use crate::error::FrontierError;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Which end of the frontier `remove` takes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Most recently added first (depth-first).
    Lifo,
    /// Earliest added first (breadth-first).
    Fifo,
}

/// Discovered but not yet expanded nodes, in insertion order.
///
/// The frontier does not deduplicate; callers check `contains_state` before adding.
#[derive(Debug)]
pub struct Frontier {
    policy: RemovalPolicy,
    nodes: VecDeque<SearchNode>,
    state_counts: FxHashMap<PersonId, usize>,
}

impl Frontier {
    pub fn new(policy: RemovalPolicy) -> Self {
        Self {
            policy,
            nodes: VecDeque::new(),
            state_counts: FxHashMap::default(),
        }
    }

    pub fn stack() -> Self {
        Self::new(RemovalPolicy::Lifo)
    }

    pub fn queue() -> Self {
        Self::new(RemovalPolicy::Fifo)
    }

    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    pub fn add(&mut self, node: SearchNode) {
        *self.state_counts.entry(node.state.clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.state_counts.contains_key(state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn remove(&mut self) -> Result<SearchNode, FrontierError> {
        let node = match self.policy {
            RemovalPolicy::Lifo => self.nodes.pop_back(),
            RemovalPolicy::Fifo => self.nodes.pop_front(),
        }
        .ok_or(FrontierError::Empty)?;

        self.forget_state(&node.state);
        Ok(node)
    }

    fn forget_state(&mut self, state: &PersonId) {
        if let Some(count) = self.state_counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.state_counts.remove(state);
            }
        }
    }
}
