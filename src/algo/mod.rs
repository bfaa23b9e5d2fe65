/// Tabular methods, where every state-action pair gets its own entry
pub mod tabular;

pub use tabular::QLearner;
