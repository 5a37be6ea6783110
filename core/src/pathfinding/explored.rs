use crate::dataset::PersonId;
use rustc_hash::FxHashSet;

/// People whose neighbors have already been generated. Only ever grows.
#[derive(Debug, Default)]
pub struct ExploredSet {
    states: FxHashSet<PersonId>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, state: PersonId) {
        self.states.insert(state);
    }

    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
