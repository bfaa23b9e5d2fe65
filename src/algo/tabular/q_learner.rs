use std::collections::{BTreeMap, HashMap};

use log::trace;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{assert_interval, env::StateKey};

use super::{Edge, Key, TransitionGraph};

/// Default discount factor
pub const GAMMA: f32 = 0.8;

/// A Q-learner that refines its value table by replaying random known transitions
///
/// Real observations only add edges to the [`TransitionGraph`]; values are computed by
/// [`step`](QLearner::step) and [`learn`](QLearner::learn), which sample edges from the graph
/// and apply `Q(s, a) = r + gamma * max_a' Q(s', a')`.
///
/// ### Generics
/// - `S` - The state key
/// - `A` - The action name; an unnamed action is named after its destination, hence `From<S>`
///
/// All randomness (sampling and tie-breaking) comes from an owned [`StdRng`], so a seeded
/// learner is fully reproducible.
pub struct QLearner<S = StateKey, A = String>
where
    S: Key,
    A: Key + From<S>,
{
    graph: TransitionGraph<S, A>,
    values: HashMap<S, BTreeMap<A, f32>>,
    gamma: f32, // discount factor
    current: Option<S>,
    rng: StdRng,
}

impl<S, A> Default for QLearner<S, A>
where
    S: Key,
    A: Key + From<S>,
{
    fn default() -> Self {
        Self::new(GAMMA)
    }
}

impl<S, A> QLearner<S, A>
where
    S: Key,
    A: Key + From<S>,
{
    /// Initialize an empty learner seeded from system entropy
    ///
    /// **Panics** if `gamma` is not in the interval `[0,1]`
    pub fn new(gamma: f32) -> Self {
        Self::with_rng(gamma, StdRng::from_entropy())
    }

    /// Initialize an empty learner with a fixed seed
    ///
    /// **Panics** if `gamma` is not in the interval `[0,1]`
    pub fn seeded(gamma: f32, seed: u64) -> Self {
        Self::with_rng(gamma, StdRng::seed_from_u64(seed))
    }

    fn with_rng(gamma: f32, rng: StdRng) -> Self {
        assert_interval!(gamma, 0.0, 1.0);
        Self {
            graph: TransitionGraph::new(),
            values: HashMap::new(),
            gamma,
            current: None,
            rng,
        }
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn graph(&self) -> &TransitionGraph<S, A> {
        &self.graph
    }

    /// Number of known states
    pub fn state_count(&self) -> usize {
        self.graph.len()
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.graph.contains(state)
    }

    /// Known states in the order they were first seen
    pub fn states(&self) -> &[S] {
        self.graph.states()
    }

    pub fn edge(&self, state: &S, action: &A) -> Option<&Edge<S>> {
        self.graph.edge(state, action)
    }

    /// Record that taking `action` in `from` led to `to` and paid `reward`
    ///
    /// Without a name the action is named after `to`. Recording an action again replaces the
    /// previous edge.
    pub fn record_transition(&mut self, from: S, to: S, reward: f32, action: Option<A>) {
        let action = action.unwrap_or_else(|| A::from(to.clone()));
        self.graph.insert(from, to, reward, action);
    }

    /// Make `state` the current state
    ///
    /// **Returns** `false`, leaving the current state unchanged, if `state` is unknown
    pub fn set_state(&mut self, state: &S) -> bool {
        let known = self.contains_state(state);
        if known {
            self.current = Some(state.clone());
        }
        known
    }

    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Estimated value of taking `action` in `state`, if one was ever computed
    pub fn value(&self, state: &S, action: &A) -> Option<f32> {
        self.values.get(state)?.get(action).copied()
    }

    /// Highest value recorded for `state`, floored at zero
    pub fn max_value(&self, state: &S) -> f32 {
        self.values
            .get(state)
            .map(|v| v.values().fold(0.0, |max, &x| f32::max(max, x)))
            .unwrap_or(0.0)
    }

    /// Sample one edge from the current state and update its value
    ///
    /// A random known state is used if there is no current state. **Returns** the state moved
    /// to, or `None` without updating anything if there is no state or it has no edges.
    pub fn step(&mut self) -> Option<S> {
        if self.current.is_none() {
            self.current = self.graph.random_state(&mut self.rng).cloned();
        }
        let state = self.current.clone()?;
        let (action, edge) = self.graph.random_edge(&state, &mut self.rng)?.clone();

        let value = edge.reward + self.gamma * self.max_value(&edge.next);
        trace!("Q({state:?}, {action:?}) <- {value}");
        self.values.entry(state).or_default().insert(action, value);

        self.current = Some(edge.next.clone());
        Some(edge.next)
    }

    /// Run `max(1, steps)` synthetic updates, each from a fresh random known state
    pub fn learn(&mut self, steps: i64) {
        for _ in 0..steps.max(1) {
            self.current = self.graph.random_state(&mut self.rng).cloned();
            self.step();
        }
    }

    /// The action with the highest value in `state`, `None` if no value was recorded
    ///
    /// Equal values are broken with a coin flip, so repeated calls may disagree.
    pub fn best_action(&mut self, state: &S) -> Option<A> {
        let values = self.values.get(state)?;
        let mut best: Option<(&A, f32)> = None;
        for (action, &value) in values {
            best = match best {
                None => Some((action, value)),
                Some((_, b)) if value == b && self.rng.gen_bool(0.5) => Some((action, value)),
                Some((_, b)) if value > b => Some((action, value)),
                keep => keep,
            };
        }

        best.map(|(a, _)| a.clone())
    }

    /// Whether a value was ever computed for `action` in `state`
    pub fn knows_action(&self, state: &S, action: &A) -> bool {
        self.values
            .get(state)
            .is_some_and(|v| v.contains_key(action))
    }

    /// Forget every state, edge and value
    ///
    /// Nothing calls this implicitly; callers decide where an episode ends.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.values.clear();
        self.current = None;
    }
}
