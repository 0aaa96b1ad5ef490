//! Stateful knight move engine.
//!
//! The engine holds a single reference square. It starts unset, is replaced
//! on every successful [`KnightMoveEngine::set_position`], and is never
//! cleared by the engine itself.

use tracing::debug;

use crate::error::EngineError;
use crate::knight::{KnightTargets, knight_targets};
use crate::square::Square;

/// Knight move generator bound to one reference square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnightMoveEngine {
    position: Option<Square>,
}

impl KnightMoveEngine {
    /// Create an engine with no position set.
    pub const fn new() -> Self {
        Self { position: None }
    }

    /// Parse `notation` and make it the reference square.
    ///
    /// On error the previous position is kept.
    pub fn set_position(&mut self, notation: &str) -> Result<(), EngineError> {
        let square = Square::from_notation(notation)?;
        self.set_square(square);
        Ok(())
    }

    /// Make `square` the reference square.
    pub fn set_square(&mut self, square: Square) {
        debug!(%square, "position set");
        self.position = Some(square);
    }

    /// Return the current reference square, if any.
    pub fn position(&self) -> Option<Square> {
        self.position
    }

    /// Return the knight targets from the reference square.
    pub fn moves(&self) -> Result<KnightTargets, EngineError> {
        self.position
            .map(knight_targets)
            .ok_or(EngineError::NoPositionSet)
    }

    /// Return the knight targets from the reference square as notation strings.
    pub fn move_notations(&self) -> Result<Vec<String>, EngineError> {
        self.moves().map(|targets| targets.to_notations())
    }
}
