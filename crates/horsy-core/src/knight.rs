//! Knight offsets and target generation.

use std::fmt;

use crate::square::Square;

/// A knight displacement, in `(file, rank)` deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnightOffset {
    pub file: i8,
    pub rank: i8,
}

impl KnightOffset {
    /// The eight knight offsets, clockwise from north-north-east.
    ///
    /// This order is also the order of every generated target list.
    pub const ALL: [KnightOffset; 8] = [
        KnightOffset::new(1, 2),
        KnightOffset::new(2, 1),
        KnightOffset::new(2, -1),
        KnightOffset::new(1, -2),
        KnightOffset::new(-1, -2),
        KnightOffset::new(-2, -1),
        KnightOffset::new(-2, 1),
        KnightOffset::new(-1, 2),
    ];

    const fn new(file: i8, rank: i8) -> KnightOffset {
        KnightOffset { file, rank }
    }
}

/// Stack-allocated list of knight targets. Capacity 8 covers every square.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KnightTargets {
    squares: [Square; 8],
    len: u8,
}

impl KnightTargets {
    /// Create an empty target list.
    pub const fn new() -> KnightTargets {
        KnightTargets {
            squares: [Square::A1; 8],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < 8);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Return the number of targets.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if there are no targets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the targets as a slice, in offset order.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    /// Return `true` if `sq` is one of the targets.
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Iterate over the targets in offset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Return the targets in notation form.
    pub fn to_notations(&self) -> Vec<String> {
        self.iter().map(Square::to_string).collect()
    }
}

impl Default for KnightTargets {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a KnightTargets {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for KnightTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for KnightTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Return every square a knight on `from` can reach, in [`KnightOffset::ALL`] order.
///
/// Candidates that fall off the board are dropped.
pub fn knight_targets(from: Square) -> KnightTargets {
    let origin = from.coordinate();
    let mut targets = KnightTargets::new();
    for offset in KnightOffset::ALL {
        if let Some(sq) = Square::on_board(origin + offset) {
            targets.push(sq);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::{KnightOffset, KnightTargets, knight_targets};
    use crate::square::Square;

    #[test]
    fn offsets_are_distinct_knight_jumps() {
        for (i, a) in KnightOffset::ALL.iter().enumerate() {
            let (df, dr) = (a.file.abs(), a.rank.abs());
            assert!((df, dr) == (1, 2) || (df, dr) == (2, 1), "{a:?}");
            for b in &KnightOffset::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn corner_targets_in_offset_order() {
        let targets = knight_targets(Square::A1);
        assert_eq!(targets.as_slice(), &[Square::B3, Square::C2]);
        assert_eq!(format!("{targets}"), "B3 C2");
    }

    #[test]
    fn center_has_eight_targets() {
        let targets = knight_targets(Square::D4);
        assert_eq!(
            targets.to_notations(),
            ["E6", "F5", "F3", "E2", "C2", "B3", "B5", "C6"]
        );
    }

    #[test]
    fn contains_and_empty() {
        let targets = knight_targets(Square::H8);
        assert!(!targets.is_empty());
        assert!(targets.contains("G6".parse().unwrap()));
        assert!(!targets.contains(Square::H8));
        assert!(KnightTargets::default().is_empty());
    }

    #[test]
    fn knight_jumps_are_symmetric() {
        for from in Square::all() {
            for to in &knight_targets(from) {
                assert!(knight_targets(*to).contains(from), "{from} <-> {to}");
            }
        }
    }

    #[test]
    fn debug_lists_squares() {
        assert_eq!(
            format!("{:?}", knight_targets(Square::A1)),
            "[Square(B3), Square(C2)]"
        );
    }
}
