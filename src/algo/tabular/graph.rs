use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng};

use super::Key;

/// Where an action led and what it paid the last time it was observed
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<S> {
    pub next: S,
    pub reward: f32,
}

#[derive(Clone, Debug)]
struct Node<S, A> {
    edges: Vec<(A, Edge<S>)>,
}

impl<S, A> Default for Node<S, A> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// Directed graph of observed transitions
///
/// Nodes are states, created the first time they are mentioned. Each state holds at most one
/// edge per action name; recording the same action again overwrites it. Nothing is ever
/// removed short of [`clear`](TransitionGraph::clear).
#[derive(Clone, Debug)]
pub struct TransitionGraph<S, A> {
    index: HashMap<S, usize>,
    states: Vec<S>,
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for TransitionGraph<S, A> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            states: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl<S: Key, A: Key> TransitionGraph<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `state` if it is not known yet
    ///
    /// **Returns** the node index of the state
    pub fn add_state(&mut self, state: S) -> usize {
        if let Some(&i) = self.index.get(&state) {
            return i;
        }

        let i = self.states.len();
        self.index.insert(state.clone(), i);
        self.states.push(state);
        self.nodes.push(Node::default());
        i
    }

    /// Attach `action` to `from`, leading to `to` with `reward`, creating both states as needed
    pub fn insert(&mut self, from: S, to: S, reward: f32, action: A) {
        self.add_state(to.clone());
        let i = self.add_state(from);
        let edge = Edge { next: to, reward };

        let edges = &mut self.nodes[i].edges;
        match edges.iter_mut().find(|(a, _)| *a == action) {
            Some((_, e)) => *e = edge,
            None => edges.push((action, edge)),
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Number of known states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Known states in the order they were first seen
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Outgoing edges of `state`, empty if the state is unknown
    pub fn edges(&self, state: &S) -> &[(A, Edge<S>)] {
        self.index
            .get(state)
            .map(|&i| self.nodes[i].edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge(&self, state: &S, action: &A) -> Option<&Edge<S>> {
        self.edges(state)
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, e)| e)
    }

    /// A known state chosen uniformly at random, `None` if the graph is empty
    pub fn random_state(&self, rng: &mut impl Rng) -> Option<&S> {
        self.states.choose(rng)
    }

    /// One of the outgoing edges of `state` chosen uniformly at random
    pub fn random_edge(&self, state: &S, rng: &mut impl Rng) -> Option<&(A, Edge<S>)> {
        self.edges(state).choose(rng)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.states.clear();
        self.nodes.clear();
    }
}
