use std::{borrow::Borrow, fmt};

use crate::game::{Board, CellCode, Pos};

/// Canonical name of a state: the pattern of a position's four neighbours
///
/// Keys always start with `S` so they never collide with a raw cell code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(String);

impl StateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StateKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.0
    }
}

impl Borrow<str> for StateKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The codes around a position, with off-board neighbours reported as wood
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surroundings {
    pub north: CellCode,
    pub south: CellCode,
    pub east: CellCode,
    pub west: CellCode,
}

impl Surroundings {
    pub fn of(board: &Board, (row, col): Pos) -> Self {
        let at = |r: Option<usize>, c: Option<usize>| {
            r.zip(c)
                .and_then(|p| board.get(p))
                .unwrap_or(CellCode::WOOD)
        };

        Self {
            north: at(row.checked_sub(1), Some(col)),
            south: at(row.checked_add(1), Some(col)),
            east: at(Some(row), col.checked_add(1)),
            west: at(Some(row), col.checked_sub(1)),
        }
    }

    /// In encoding order
    pub fn to_array(self) -> [CellCode; 4] {
        [self.north, self.south, self.east, self.west]
    }
}

/// Encode the state at `pos`: `S` followed by the north, south, east and west codes
///
/// A neighbour equal to `self_code` is encoded as an empty tile.
pub fn encode(board: &Board, pos: Pos, self_code: CellCode) -> StateKey {
    let mut key = String::with_capacity(9);
    key.push('S');
    for code in Surroundings::of(board, pos).to_array() {
        let code = if code == self_code {
            CellCode::EMPTY
        } else {
            code
        };
        key.push_str(code.as_str());
    }

    StateKey(key)
}

#[cfg(test)]
mod tests {
    use crate::game::HeroId;

    use super::*;

    fn board(tiles: &str, size: usize) -> Board {
        Board::parse(size, tiles).unwrap()
    }

    #[test]
    fn corner_neighbours_off_board_are_wood() {
        // ##|
        //   |@2
        let board = board("##    @2", 2);
        let me = CellCode::hero(HeroId::new(2).unwrap());

        let around = Surroundings::of(&board, (1, 1));
        assert_eq!(around.north, CellCode::EMPTY, "North of (1,1) is (0,1)");
        assert_eq!(around.west, CellCode::EMPTY, "West of (1,1) is (1,0)");
        assert_eq!(around.south, CellCode::WOOD, "South leaves the board");
        assert_eq!(around.east, CellCode::WOOD, "East leaves the board");

        assert_eq!(encode(&board, (1, 1), me).as_str(), "S  ####  ");

        let top_left = Surroundings::of(&board, (0, 0));
        assert_eq!(top_left.north, CellCode::WOOD);
        assert_eq!(top_left.west, CellCode::WOOD);
    }

    #[test]
    fn own_hero_reads_as_empty() {
        let board = board("##    @2", 2);
        let two = CellCode::hero(HeroId::new(2).unwrap());
        let one = CellCode::hero(HeroId::new(1).unwrap());

        assert_eq!(
            encode(&board, (0, 1), two).as_str(),
            "S##  ####",
            "Hero 2 sees itself as empty"
        );
        assert_eq!(encode(&board, (0, 1), one).as_str(), "S##@2####");
    }

    #[test]
    fn encoding_is_deterministic() {
        let board = board("##[]$-  @1$2    @3", 3);
        let me = CellCode::hero(HeroId::new(1).unwrap());
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(encode(&board, (row, col), me), encode(&board, (row, col), me));
            }
        }
    }
}
