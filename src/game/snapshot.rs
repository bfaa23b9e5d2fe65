use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{Board, HeroId, Pos};

/// The payload handed over by the game client every turn
///
/// Only the fields the agent reads are modelled; anything else in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub game: GameSnapshot,
    pub hero: HeroSnapshot,
}

impl TurnSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
}

/// Raw board as sent by the server: `tiles` holds `size * size` two-character codes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub tiles: String,
}

impl BoardSnapshot {
    pub fn parse(&self) -> Result<Board> {
        Board::parse(self.size, &self.tiles)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPos {
    pub x: usize,
    pub y: usize,
}

/// Identity, stats, and position of the hero the agent controls
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroSnapshot {
    pub id: u8,
    pub life: i32,
    pub gold: i32,
    pub pos: HeroPos,
}

impl HeroSnapshot {
    pub fn hero_id(&self) -> Result<HeroId> {
        HeroId::new(self.id)
    }

    /// The server's `x` is the row and `y` the column
    pub fn position(&self) -> Pos {
        (self.pos.x, self.pos.y)
    }
}

impl fmt::Display for HeroSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hero {}: {}HP {}G at [{},{}]",
            self.id, self.life, self.gold, self.pos.x, self.pos.y
        )
    }
}
