//! Selected square and highlighted knight targets.

use horsy_core::{KnightMoveEngine, KnightTargets, Square};
use tracing::debug;

/// Result of clicking a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The square is now selected and its targets highlighted.
    Selected(Square),
    /// The square was already selected and has been released.
    Deselected(Square),
}

/// Board selection state driven by square clicks.
///
/// Clicking a new square selects it and highlights its knight targets,
/// replacing any earlier selection. Clicking the selected square again
/// clears everything.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    engine: KnightMoveEngine,
    selected: Option<Square>,
    highlighted: KnightTargets,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on `square`.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.selected == Some(square) {
            self.clear();
            debug!(%square, "square deselected");
            return ClickOutcome::Deselected(square);
        }

        self.engine.set_square(square);
        // The engine was positioned on the line above.
        self.highlighted = self.engine.moves().unwrap_or_default();
        self.selected = Some(square);
        debug!(%square, targets = %self.highlighted, "square selected");
        ClickOutcome::Selected(square)
    }

    /// Drop the selection and all highlights.
    pub fn clear(&mut self) {
        self.selected = None;
        self.highlighted = KnightTargets::new();
    }

    /// Return the selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Return the highlighted targets (empty when nothing is selected).
    pub fn highlighted(&self) -> &KnightTargets {
        &self.highlighted
    }

    /// Return `true` if `square` is a highlighted target.
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.highlighted.contains(square)
    }
}

#[cfg(test)]
mod tests {
    use horsy_core::Square;

    use super::{ClickOutcome, Selection};

    #[test]
    fn first_click_selects() {
        let mut selection = Selection::new();
        assert_eq!(selection.click(Square::A1), ClickOutcome::Selected(Square::A1));
        assert_eq!(selection.selected(), Some(Square::A1));
        assert_eq!(selection.highlighted().as_slice(), &[Square::B3, Square::C2]);
        assert!(selection.is_highlighted(Square::C2));
        assert!(!selection.is_highlighted(Square::A1));
    }

    #[test]
    fn second_click_on_same_square_deselects() {
        let mut selection = Selection::new();
        selection.click(Square::D4);
        assert_eq!(
            selection.click(Square::D4),
            ClickOutcome::Deselected(Square::D4)
        );
        assert_eq!(selection.selected(), None);
        assert!(selection.highlighted().is_empty());
    }

    #[test]
    fn click_on_other_square_replaces_highlights() {
        let mut selection = Selection::new();
        selection.click(Square::D4);
        assert_eq!(selection.highlighted().len(), 8);

        assert_eq!(selection.click(Square::A1), ClickOutcome::Selected(Square::A1));
        assert_eq!(selection.highlighted().len(), 2);
        assert!(!selection.is_highlighted("E6".parse().unwrap()));
    }

    #[test]
    fn reselect_after_deselect() {
        let mut selection = Selection::new();
        selection.click(Square::E4);
        selection.click(Square::E4);
        assert_eq!(selection.click(Square::E4), ClickOutcome::Selected(Square::E4));
        assert_eq!(selection.highlighted().len(), 8);
    }

    #[test]
    fn clear_resets() {
        let mut selection = Selection::new();
        selection.click(Square::H8);
        selection.clear();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_highlighted("G6".parse().unwrap()));
    }
}
