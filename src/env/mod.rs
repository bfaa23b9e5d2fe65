use rand::{seq::SliceRandom, Rng};

use crate::error::Result;

mod arena;
mod encoder;
mod reward;

pub use arena::Arena;
pub use encoder::{encode, StateKey, Surroundings};
pub use reward::RewardTable;

/// The world as one agent sees it, one turn at a time
///
/// Unlike a simulator, the environment cannot be stepped: the game server owns the real
/// dynamics. It can only report the current state and project what an action would lead to.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// The state the agent is currently in
    fn state(&self) -> Self::State;

    /// Project the outcome of taking `action` from the current state without committing it
    ///
    /// **Returns** `(next_state, reward)`; the next state is always known but the reward lookup
    /// can fail
    fn preview(&self, action: Self::Action) -> (Self::State, Result<f32>);
}

/// An environment with a finite set of actions that are always available
pub trait DiscreteActionSpace: Environment {
    /// Get the available actions for the current state
    ///
    /// The returned vector should never be empty.
    fn actions(&self) -> Vec<Self::Action>;

    /// Choose an action uniformly at random
    fn random_action(&self, rng: &mut impl Rng) -> Self::Action
    where
        Self::Action: Clone,
    {
        self.actions()
            .choose(rng)
            .cloned()
            .expect("There is always at least one action available")
    }
}
