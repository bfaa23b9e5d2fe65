use rand::{seq::SliceRandom, Rng};
use strum::{Display, EnumIter, EnumString, VariantArray};

use crate::error::Error;

use super::Pos;

/// One of the four moves a hero can make each turn
///
/// Formats and parses as the short codes `n`, `s`, `e`, `w`; the long names are accepted when
/// parsing.
#[derive(EnumIter, VariantArray, Display, EnumString, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    #[strum(to_string = "n", serialize = "north")]
    North,
    #[strum(to_string = "s", serialize = "south")]
    South,
    #[strum(to_string = "e", serialize = "east")]
    East,
    #[strum(to_string = "w", serialize = "west")]
    West,
}

impl Dir {
    /// Row and column delta of a move
    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::North => (-1, 0),
            Dir::South => (1, 0),
            Dir::East => (0, 1),
            Dir::West => (0, -1),
        }
    }

    /// The full direction name expected by the game server
    pub fn name(self) -> &'static str {
        match self {
            Dir::North => "north",
            Dir::South => "south",
            Dir::East => "east",
            Dir::West => "west",
        }
    }

    /// Apply the move to `pos`, clamping both axes into `[0, size-1]`
    pub fn apply(self, pos: Pos, size: usize) -> Pos {
        let limit = size.saturating_sub(1) as isize;
        let (dr, dc) = self.delta();
        (
            (pos.0 as isize + dr).clamp(0, limit) as usize,
            (pos.1 as isize + dc).clamp(0, limit) as usize,
        )
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::VARIANTS.choose(rng).expect("There are four directions")
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse()
            .map_err(|_| Error::InvalidDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn short_codes_round_trip() {
        assert_eq!(Dir::North.to_string(), "n");
        assert_eq!(Dir::parse("w").unwrap(), Dir::West);
        assert_eq!(Dir::parse("east").unwrap(), Dir::East);
        assert!(Dir::parse("up").is_err());
    }

    #[test]
    fn apply_clamps_to_board() {
        for size in 1..5 {
            for row in 0..size {
                for col in 0..size {
                    for dir in Dir::iter() {
                        let (r, c) = dir.apply((row, col), size);
                        assert!(r < size && c < size, "{dir:?} from ({row},{col}) stays on board");
                    }
                }
            }
        }
        assert_eq!(Dir::North.apply((0, 2), 4), (0, 2), "Blocked by the top edge");
        assert_eq!(Dir::South.apply((0, 2), 4), (1, 2));
        assert_eq!(Dir::West.apply((3, 0), 4), (3, 0), "Blocked by the left edge");
        assert_eq!(Dir::East.apply((3, 0), 4), (3, 1));
    }
}
