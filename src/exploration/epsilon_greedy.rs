use rand::Rng;

use crate::decay::Decay;

use super::Choice;

/// Epsilon greedy exploration policy with time-decaying epsilon threshold
#[derive(Clone, Debug)]
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }

    /// Exploration probability at time `t`
    pub fn epsilon(&self, t: u32) -> f32 {
        self.epsilon.evaluate(t as f32)
    }

    /// Invoke epsilon greedy policy at time `t`
    pub fn choose(&self, t: u32, rng: &mut impl Rng) -> Choice {
        if rng.gen::<f32>() >= self.epsilon(t) {
            Choice::Exploit
        } else {
            Choice::Explore
        }
    }
}
