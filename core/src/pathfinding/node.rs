use crate::dataset::{MovieId, PersonId};

/// One hop of a result path: the movie shared with the previous person, and the person reached.
pub type PathStep = (MovieId, PersonId);

/// Handle of an expanded node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Search-tree element. The root has neither parent nor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<NodeId>,
    pub action: Option<MovieId>,
}

impl SearchNode {
    pub fn root(state: PersonId) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    pub fn child(state: PersonId, parent: NodeId, action: MovieId) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// Append-only storage for expanded nodes; children refer to parents by handle.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Handles are only ever minted by `insert` on this arena.
    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Walks parent handles from `node` back to the root and returns the hops in start to goal order.
    pub fn path_to(&self, node: &SearchNode) -> Vec<PathStep> {
        let mut path = Vec::new();
        let mut current = node;

        while let (Some(parent), Some(action)) = (current.parent, &current.action) {
            path.push((action.clone(), current.state.clone()));
            current = self.get(parent);
        }

        path.reverse();
        path
    }
}
