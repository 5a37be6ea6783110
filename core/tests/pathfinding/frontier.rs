use crate::fixtures::id;
use degrees_core::{ExploredSet, Frontier, FrontierError, RemovalPolicy, SearchNode};

fn fill(frontier: &mut Frontier, states: &[&str]) {
    for state in states {
        frontier.add(SearchNode::root(id(state)));
    }
}

fn drain(frontier: &mut Frontier) -> Vec<String> {
    let mut order = Vec::new();
    while let Ok(node) = frontier.remove() {
        order.push(node.state.to_string());
    }
    order
}

#[test]
fn test_queue_removes_in_insertion_order() {
    let mut frontier = Frontier::queue();
    fill(&mut frontier, &["a", "b", "c", "d"]);

    assert_eq!(frontier.policy(), RemovalPolicy::Fifo);
    assert_eq!(drain(&mut frontier), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_stack_removes_in_reverse_order() {
    let mut frontier = Frontier::stack();
    fill(&mut frontier, &["a", "b", "c", "d"]);

    assert_eq!(frontier.policy(), RemovalPolicy::Lifo);
    assert_eq!(drain(&mut frontier), vec!["d", "c", "b", "a"]);
}

#[test]
fn test_interleaved_queue_operations_stay_fifo() {
    let mut frontier = Frontier::queue();
    fill(&mut frontier, &["a", "b"]);
    assert_eq!(frontier.remove().unwrap().state, id("a"));

    fill(&mut frontier, &["c"]);
    assert_eq!(drain(&mut frontier), vec!["b", "c"]);
}

#[test]
fn test_remove_from_empty_frontier_fails() {
    for mut frontier in [Frontier::queue(), Frontier::stack()] {
        assert!(frontier.is_empty());
        assert_eq!(frontier.remove(), Err(FrontierError::Empty));

        fill(&mut frontier, &["a"]);
        assert!(frontier.remove().is_ok());
        assert_eq!(frontier.remove(), Err(FrontierError::Empty));
    }
}

#[test]
fn test_contains_state_tracks_removals() {
    let mut frontier = Frontier::queue();
    fill(&mut frontier, &["a", "b"]);

    assert!(frontier.contains_state(&id("a")));
    assert!(frontier.contains_state(&id("b")));
    assert!(!frontier.contains_state(&id("c")));

    frontier.remove().unwrap();
    assert!(!frontier.contains_state(&id("a")));
    assert!(frontier.contains_state(&id("b")));
    assert_eq!(frontier.len(), 1);
}

#[test]
fn test_contains_state_with_duplicate_states() {
    let mut frontier = Frontier::stack();
    fill(&mut frontier, &["a", "a"]);

    frontier.remove().unwrap();
    assert!(frontier.contains_state(&id("a")));

    frontier.remove().unwrap();
    assert!(!frontier.contains_state(&id("a")));
}

#[test]
fn test_explored_set_grows_monotonically() {
    let mut explored = ExploredSet::new();
    assert!(explored.is_empty());

    explored.add(id("a"));
    explored.add(id("b"));
    explored.add(id("a"));

    assert!(explored.contains_state(&id("a")));
    assert!(explored.contains_state(&id("b")));
    assert!(!explored.contains_state(&id("c")));
    assert_eq!(explored.len(), 2);
}
