//! Marks-match-history invariant: the board's marks are the replayed toggles.

use super::Invariant;
use crate::{BingoCard, Cell};

/// Invariant: a tile is marked iff it was toggled an odd number of times.
///
/// Verified by replaying the toggle history against the card with every
/// mark cleared and comparing.
pub struct MarksMatchHistoryInvariant;

impl Invariant<BingoCard> for MarksMatchHistoryInvariant {
    fn holds(card: &BingoCard) -> bool {
        let mut replayed = card.board().cleared();
        for &cell in card.history() {
            replayed.toggle(cell);
        }
        Cell::all().all(|cell| replayed.is_marked(cell) == card.board().is_marked(cell))
    }

    fn description() -> &'static str {
        "Tile marks match the toggle history"
    }
}
