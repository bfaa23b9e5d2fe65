use std::collections::HashMap;

use crate::game::{CellCode, HeroId};

/// Reward for stepping onto each kind of tile, as seen by one hero
///
/// Own mines are worth nothing to take, every other mine is a target and every other hero
/// is worth attacking. The observing hero's own code has no entry.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardTable {
    hero: HeroId,
    rewards: HashMap<CellCode, f32>,
}

impl RewardTable {
    pub fn build(hero: HeroId) -> Self {
        let mut rewards = HashMap::from([
            (CellCode::WOOD, -1.0),
            (CellCode::TAVERN, 1.0),
            (CellCode::EMPTY, 0.0),
            (CellCode::NEUTRAL_MINE, 100.0),
        ]);

        for other in HeroId::ALL {
            if other == hero {
                rewards.insert(CellCode::mine(other), -1.0);
            } else {
                rewards.insert(CellCode::mine(other), 100.0);
                rewards.insert(CellCode::hero(other), 50.0);
            }
        }

        Self { hero, rewards }
    }

    /// The hero this table was built for
    pub fn hero(&self) -> HeroId {
        self.hero
    }

    pub fn get(&self, code: CellCode) -> Option<f32> {
        self.rewards.get(&code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellCode, f32)> + '_ {
        self.rewards.iter().map(|(&c, &r)| (c, r))
    }
}
