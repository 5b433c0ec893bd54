//! A bingo card under play.
//!
//! [`BingoCard`] owns the board, the toggle history and a latched win flag.
//! The win check runs after every toggle, but a [`WinEvent`] is produced only
//! on the transition from not-won to won. A prize or notification attached
//! to that event fires once per card.

use crate::invariants::{CardInvariants, InvariantSet, InvariantViolation};
use crate::rules::{Line, winning_line};
use crate::{Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Emitted once, when a card first completes a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvent {
    /// First complete line in evaluation order.
    pub line: Line,
    /// Number of toggles it took.
    pub toggles: usize,
}

/// Result of toggling one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The toggled cell.
    pub cell: Cell,
    /// Mark state after the toggle.
    pub marked: bool,
    /// Present only on the toggle that first won the card.
    pub win: Option<WinEvent>,
}

/// A card being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoCard {
    board: Board,
    history: Vec<Cell>,
    won: bool,
}

impl BingoCard {
    /// Starts play on a freshly generated board.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
            won: false,
        }
    }

    /// Rebuilds a card from stored parts without validating them.
    ///
    /// Call [`BingoCard::validate`] before trusting a restored card.
    pub fn restore(board: Board, history: Vec<Cell>, won: bool) -> Self {
        Self {
            board,
            history,
            won,
        }
    }

    /// Toggles the tile at `cell` and re-evaluates the win rules.
    #[instrument(skip(self, cell), fields(cell = %cell))]
    pub fn toggle(&mut self, cell: Cell) -> ToggleOutcome {
        let marked = self.board.toggle(cell);
        self.history.push(cell);
        debug!(marked, toggles = self.history.len(), "Tile toggled");

        let win = match winning_line(&self.board) {
            Some(line) if !self.won => {
                self.won = true;
                info!(%line, toggles = self.history.len(), "Card won");
                Some(WinEvent {
                    line,
                    toggles: self.history.len(),
                })
            }
            _ => None,
        };

        debug_assert!(self.validate().is_ok(), "Card invariants violated");

        ToggleOutcome { cell, marked, win }
    }

    /// Checks the card's invariants.
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        CardInvariants::check_all(self)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the toggle history, oldest first.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Returns true once the card has completed a line.
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Returns the currently complete line, if any.
    pub fn current_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }
}
