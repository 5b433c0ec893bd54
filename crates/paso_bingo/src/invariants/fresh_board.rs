//! Fresh board invariant: a dealt card starts with no marks.

use super::{GeneratedCard, Invariant};

/// Invariant: every tile of a newly generated card is unmarked.
pub struct FreshBoardInvariant;

impl Invariant<GeneratedCard<'_>> for FreshBoardInvariant {
    fn holds(card: &GeneratedCard<'_>) -> bool {
        card.board().marked_count() == 0
    }

    fn description() -> &'static str {
        "Generated card has no marked tiles"
    }
}
