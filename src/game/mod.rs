mod board;
mod cell;
mod dir;
mod snapshot;

pub use board::{Board, Pos};
pub use cell::{CellCode, HeroId};
pub use dir::Dir;
pub use snapshot::{BoardSnapshot, GameSnapshot, HeroPos, HeroSnapshot, TurnSnapshot};
