//! Text rendering of the board.

use std::fmt;

use horsy_core::{File, Rank, Shade, Square};

use crate::selection::Selection;

const SELECTED: char = 'N';
const HIGHLIGHTED: char = '*';
const DARK: char = '#';
const LIGHT: char = '.';

/// Wrapper for printing a [`Selection`] as an 8x8 grid, rank 8 at the top.
pub struct BoardView<'a> {
    selection: &'a Selection,
    show_labels: bool,
}

impl<'a> BoardView<'a> {
    /// Create a view over `selection`.
    pub fn new(selection: &'a Selection, show_labels: bool) -> Self {
        Self {
            selection,
            show_labels,
        }
    }

    fn glyph(&self, square: Square) -> char {
        if self.selection.selected() == Some(square) {
            SELECTED
        } else if self.selection.is_highlighted(square) {
            HIGHLIGHTED
        } else {
            match square.shade() {
                Shade::Dark => DARK,
                Shade::Light => LIGHT,
            }
        }
    }

    fn write_file_axis(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for file in File::ALL {
            write!(f, " {file}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_labels {
            Self::write_file_axis(f)?;
            writeln!(f)?;
        }
        for (row, rank) in Rank::ALL.iter().rev().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            if self.show_labels {
                write!(f, "{rank}  ")?;
            }
            for file in File::ALL {
                let c = self.glyph(Square::new(file, *rank));
                if file == File::H {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            if self.show_labels {
                write!(f, "  {rank}")?;
            }
        }
        if self.show_labels {
            writeln!(f)?;
            Self::write_file_axis(f)?;
        }
        Ok(())
    }
}
