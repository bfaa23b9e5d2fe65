use log::info;
use strum::VariantArray;

use crate::{
    error::{Error, Result},
    game::{Board, BoardSnapshot, CellCode, Dir, HeroId, HeroSnapshot, Pos},
};

use super::{encode, DiscreteActionSpace, Environment, RewardTable, StateKey, Surroundings};

/// The board and the controlled hero, refreshed from every turn snapshot
#[derive(Clone, Debug, Default)]
pub struct Arena {
    board: Board,
    hero: Option<HeroId>,
    pos: Pos,
    rewards: Option<RewardTable>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid with the one described by `snapshot`
    ///
    /// **Errors** if the tile string does not form a `size` by `size` grid; the previous grid
    /// is kept in that case
    pub fn update(&mut self, snapshot: &BoardSnapshot) -> Result<()> {
        self.board = snapshot.parse()?;
        Ok(())
    }

    /// Replace the tracked hero identity and position
    pub fn update_agent(&mut self, hero: &HeroSnapshot) -> Result<()> {
        self.hero = Some(hero.hero_id()?);
        self.pos = hero.position();
        Ok(())
    }

    /// Build the reward table for `hero`, replacing any previous one
    pub fn build_rewards(&mut self, hero: HeroId) {
        info!("building reward table for hero {hero}");
        self.rewards = Some(RewardTable::build(hero));
    }

    pub fn rewards(&self) -> Option<&RewardTable> {
        self.rewards.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hero(&self) -> Option<HeroId> {
        self.hero
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    /// Codes around `pos`, or around the hero if `pos` is `None`
    pub fn surroundings(&self, pos: Option<Pos>) -> Surroundings {
        Surroundings::of(&self.board, pos.unwrap_or(self.pos))
    }

    /// Where the hero would end up after moving in `dir`, clamped to the board
    pub fn next_position(&self, dir: Dir) -> Pos {
        dir.apply(self.pos, self.board.size())
    }

    /// Reward for stepping onto `pos`; positions off the board count as wood
    ///
    /// **Errors** with [`Error::UnknownCellCode`] if the reward table has no entry for the tile,
    /// which includes the hero's own tile and any tile before a table has been built
    pub fn reward_for(&self, pos: Pos) -> Result<f32> {
        let code = self.board.get(pos).unwrap_or(CellCode::WOOD);
        self.rewards
            .as_ref()
            .and_then(|r| r.get(code))
            .ok_or(Error::UnknownCellCode(code))
    }

    /// State key at `pos`, or at the hero if `pos` is `None`
    pub fn state_at(&self, pos: Option<Pos>) -> StateKey {
        let self_code = self.hero.map(CellCode::hero).unwrap_or(CellCode::EMPTY);
        encode(&self.board, pos.unwrap_or(self.pos), self_code)
    }
}

impl Environment for Arena {
    type State = StateKey;
    type Action = Dir;

    fn state(&self) -> Self::State {
        self.state_at(None)
    }

    fn preview(&self, action: Self::Action) -> (Self::State, Result<f32>) {
        let next = self.next_position(action);
        (self.state_at(Some(next)), self.reward_for(next))
    }
}

impl DiscreteActionSpace for Arena {
    fn actions(&self) -> Vec<Self::Action> {
        Dir::VARIANTS.to_vec()
    }
}
