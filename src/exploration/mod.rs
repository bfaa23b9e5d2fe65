/// Exploration policy result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

mod epsilon_greedy;

pub use epsilon_greedy::EpsilonGreedy;
