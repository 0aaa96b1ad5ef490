//! Error types for square notation and the knight move engine.

/// Errors raised when converting between notation, coordinates and squares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The string is not a file letter `A–H` followed by a rank digit `1–8`.
    #[error("invalid square notation: \"{notation}\"")]
    InvalidNotation {
        /// The rejected input.
        notation: String,
    },
    /// A coordinate component lies outside `0..=7`.
    #[error("coordinate ({file}, {rank}) is off the board")]
    OutOfRange {
        /// Zero-based file component.
        file: i8,
        /// Zero-based rank component.
        rank: i8,
    },
}

/// Errors returned by [`KnightMoveEngine`](crate::engine::KnightMoveEngine).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The position could not be parsed or converted.
    #[error(transparent)]
    Square(#[from] SquareError),
    /// Moves were requested before any position was set.
    #[error("no position set")]
    NoPositionSet,
}

impl EngineError {
    /// Return `true` if this error was caused by malformed notation.
    pub fn is_invalid_notation(&self) -> bool {
        matches!(self, EngineError::Square(SquareError::InvalidNotation { .. }))
    }
}
