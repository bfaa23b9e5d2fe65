use std::fmt;

use crate::error::{Error, Result};

/// Identity of one of the four heroes in a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeroId(u8);

impl HeroId {
    pub const ALL: [HeroId; 4] = [HeroId(1), HeroId(2), HeroId(3), HeroId(4)];

    pub fn new(id: u8) -> Result<Self> {
        (1..=4)
            .contains(&id)
            .then_some(Self(id))
            .ok_or(Error::InvalidHeroId(id))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeroId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(id)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A two-character tile code as it appears in the board's tile string
///
/// - `##` impassable wood
/// - `  ` empty tile
/// - `[]` tavern
/// - `$-` neutral gold mine, `$1`..`$4` a hero's gold mine
/// - `@1`..`@4` a hero
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCode([u8; 2]);

impl CellCode {
    pub const WOOD: CellCode = CellCode(*b"##");
    pub const EMPTY: CellCode = CellCode(*b"  ");
    pub const TAVERN: CellCode = CellCode(*b"[]");
    pub const NEUTRAL_MINE: CellCode = CellCode(*b"$-");

    /// The gold mine owned by `hero`
    pub const fn mine(hero: HeroId) -> Self {
        CellCode([b'$', b'0' + hero.0])
    }

    /// The tile occupied by `hero`
    pub const fn hero(hero: HeroId) -> Self {
        CellCode([b'@', b'0' + hero.0])
    }

    /// Build a code from two raw bytes, which must be ASCII
    pub(crate) fn from_bytes(bytes: [u8; 2]) -> Self {
        debug_assert!(bytes.is_ascii());
        CellCode(bytes)
    }

    pub fn as_str(&self) -> &str {
        // codes are only ever built from ASCII bytes
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
