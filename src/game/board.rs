use std::ops::Index;

use crate::error::{Error, Result};

use super::CellCode;

/// Board coordinates as `(row, col)`, 0-indexed
pub type Pos = (usize, usize);

/// A square grid of cell codes, rebuilt wholesale from every snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellCode>,
}

impl Board {
    /// Split a tile string into `size` rows of `size` two-character codes
    ///
    /// **Errors** with [`Error::MalformedBoard`] if the string is not exactly `size * size * 2`
    /// ASCII bytes
    pub fn parse(size: usize, tiles: &str) -> Result<Self> {
        let bytes = tiles.as_bytes();
        let expected = size.checked_mul(size).and_then(|n| n.checked_mul(2));
        if !bytes.is_ascii() || expected != Some(bytes.len()) {
            return Err(Error::MalformedBoard {
                size,
                len: bytes.len(),
            });
        }

        let cells = bytes
            .chunks_exact(2)
            .map(|c| CellCode::from_bytes([c[0], c[1]]))
            .collect();

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The code at `pos`, or `None` if `pos` is off the board
    pub fn get(&self, pos: Pos) -> Option<CellCode> {
        let (row, col) = pos;
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// Iterate over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[CellCode]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl Index<Pos> for Board {
    type Output = CellCode;

    fn index(&self, (row, col): Pos) -> &Self::Output {
        assert!(row < self.size && col < self.size, "position is on the board");
        &self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_rows() {
        let board = Board::parse(2, "##  @1[]").unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board[(0, 0)], CellCode::WOOD);
        assert_eq!(board[(0, 1)], CellCode::EMPTY);
        assert_eq!(board[(1, 1)], CellCode::TAVERN);
        assert_eq!(board.get((2, 0)), None, "Off-board lookups yield nothing");
        assert_eq!(board.rows().count(), 2);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = Board::parse(3, "##  @1[]").unwrap_err();
        assert!(matches!(err, Error::MalformedBoard { size: 3, len: 8 }));
        assert!(Board::parse(2, "##  @1[").is_err(), "Odd tile count");
    }

    #[test]
    fn parse_rejects_overflowing_size() {
        for size in [1usize << 32, usize::MAX / 2, usize::MAX] {
            let err = Board::parse(size, "").unwrap_err();
            assert!(
                matches!(err, Error::MalformedBoard { len: 0, .. }),
                "size {size} cannot describe an empty tile string"
            );
        }
    }
}
