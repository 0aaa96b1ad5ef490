//! Knight move generation on an 8x8 board.
//!
//! Converts between algebraic notation and board coordinates, enumerates the
//! eight knight offsets, and drops candidates that leave the board.

mod engine;
mod error;
mod file;
mod knight;
mod rank;
mod shade;
mod square;

pub use engine::KnightMoveEngine;
pub use error::{EngineError, SquareError};
pub use file::File;
pub use knight::{KnightOffset, KnightTargets, knight_targets};
pub use rank::Rank;
pub use shade::Shade;
pub use square::{Coordinate, Square};
