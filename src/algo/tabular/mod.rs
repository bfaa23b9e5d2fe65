pub mod graph;
pub mod q_learner;

pub use graph::{Edge, TransitionGraph};
pub use q_learner::QLearner;

/// A trait for state and action types that can be used as keys in the learner's tables
///
/// `Ord` keeps the scan order of an action table stable for a given seed.
pub trait Key: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

impl<T> Key for T where T: Clone + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
