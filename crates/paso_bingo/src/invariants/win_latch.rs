//! Win latch invariant: the won flag records whether the card ever won.

use super::Invariant;
use crate::{BingoCard, check_win};

/// Invariant: the card is latched as won iff some prefix of its toggle
/// history produced a winning board.
///
/// Unmarking tiles after a win never clears the latch.
pub struct WinLatchInvariant;

impl Invariant<BingoCard> for WinLatchInvariant {
    fn holds(card: &BingoCard) -> bool {
        let mut replayed = card.board().cleared();
        let mut ever_won = check_win(&replayed);
        for &cell in card.history() {
            replayed.toggle(cell);
            ever_won |= check_win(&replayed);
        }
        ever_won == card.has_won()
    }

    fn description() -> &'static str {
        "Won flag is latched exactly when the history reached a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell};

    fn row(r: usize) -> Vec<Cell> {
        (0..4).map(|c| Cell::new(r, c).unwrap()).collect()
    }

    #[test]
    fn test_latch_survives_unmark() {
        let mut card = BingoCard::new(Board::blank());
        for cell in row(0) {
            card.toggle(cell);
        }
        card.toggle(Cell::new(0, 0).unwrap());
        assert!(card.has_won());
        assert!(WinLatchInvariant::holds(&card));
    }

    #[test]
    fn test_forged_latch_violates() {
        let card = BingoCard::restore(Board::blank(), Vec::new(), true);
        assert!(!WinLatchInvariant::holds(&card));
    }

    #[test]
    fn test_missing_latch_violates() {
        let history = row(3);
        let mut board = Board::blank();
        for &cell in &history {
            board.set_marked(cell, true);
        }
        let card = BingoCard::restore(board, history, false);
        assert!(!WinLatchInvariant::holds(&card));
    }
}
