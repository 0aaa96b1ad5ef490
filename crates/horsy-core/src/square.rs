//! Board squares and their coordinate form.
//!
//! A [`Square`] is always on the board. A [`Coordinate`] is a raw
//! `(file, rank)` pair that may point anywhere, which makes it the right type
//! for offset arithmetic before the on-board filter is applied.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::SquareError;
use crate::file::File;
use crate::knight::KnightOffset;
use crate::rank::Rank;
use crate::shade::Shade;

/// A zero-based `(file, rank)` pair. File 0 is `A`, rank 0 is rank `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    /// Create a coordinate from raw components.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Coordinate {
        Coordinate { file, rank }
    }

    /// Return `true` if both components lie in `0..=7`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }
}

impl Add<KnightOffset> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, offset: KnightOffset) -> Coordinate {
        Coordinate::new(self.file + offset.file, self.rank + offset.rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// A square on the board, stored as `rank * 8 + file` so A1 = 0, H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse algebraic notation such as `"E4"` or `"e4"`.
    pub fn from_notation(s: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = File::from_char(file_char).ok_or_else(invalid)?;
        let rank = Rank::from_char(rank_char).ok_or_else(invalid)?;
        Ok(Square::new(file, rank))
    }

    /// Convert a coordinate to a square, failing if it is off the board.
    pub fn from_coordinate(coord: Coordinate) -> Result<Square, SquareError> {
        Square::on_board(coord).ok_or(SquareError::OutOfRange {
            file: coord.file,
            rank: coord.rank,
        })
    }

    /// Convert a coordinate to a square, or `None` if it is off the board.
    #[inline]
    pub const fn on_board(coord: Coordinate) -> Option<Square> {
        if coord.is_on_board() {
            Some(Square(coord.rank as u8 * 8 + coord.file as u8))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 % 8) {
            Some(file) => file,
            None => unreachable!(),
        }
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 / 8) {
            Some(rank) => rank,
            None => unreachable!(),
        }
    }

    /// Return the `(file, rank)` coordinate of this square.
    #[inline]
    pub const fn coordinate(self) -> Coordinate {
        Coordinate::new((self.0 % 8) as i8, (self.0 / 8) as i8)
    }

    /// Return the shade of this square.
    #[inline]
    pub const fn shade(self) -> Shade {
        if (self.0 % 8 + self.0 / 8) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C2: Square = Square(10);
    pub const B3: Square = Square(17);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const A8: Square = Square(56);
    pub const H1: Square = Square(7);
    pub const H8: Square = Square(63);
}

impl TryFrom<Coordinate> for Square {
    type Error = SquareError;

    fn try_from(coord: Coordinate) -> Result<Square, SquareError> {
        Square::from_coordinate(coord)
    }
}

impl From<Square> for Coordinate {
    fn from(square: Square) -> Coordinate {
        square.coordinate()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_notation(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
