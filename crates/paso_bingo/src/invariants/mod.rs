//! Rules every bingo card obeys.
//!
//! Two rule sets guard a card. [`FreshCardInvariants`] covers a card straight
//! out of the generator: nothing marked, every tile drawn from the pool or a
//! sentinel. [`CardInvariants`] covers a card under play: replaying the
//! toggle history reproduces the marks and the win flag. Generation and
//! toggling check them in debug builds; loading a stored card checks the
//! play set always.

use crate::Board;

/// A rule a card state obeys, such as "marks agree with the toggle history".
pub trait Invariant<S> {
    /// True when `state` obeys the rule.
    fn holds(state: &S) -> bool;

    /// The rule in words, used in violation reports.
    fn description() -> &'static str;
}

/// A broken card rule, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Which rule was broken.
    pub description: String,
}

impl InvariantViolation {
    /// Reports a broken rule.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Rules checked as a group over one card state.
///
/// A pair `(A, B)` checks both rules and reports each one that fails, so a
/// stored card with a bad win flag and bad marks lists both problems.
pub trait InvariantSet<S> {
    /// Runs every rule, returning all failures at once.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// A freshly dealt card together with the pool it was dealt from.
#[derive(Debug, Clone)]
pub struct GeneratedCard<'a> {
    pool: Vec<&'a str>,
    board: &'a Board,
}

impl<'a> GeneratedCard<'a> {
    /// Pairs a pool with the card dealt from it.
    pub fn new<S: AsRef<str>>(pool: &'a [S], board: &'a Board) -> Self {
        Self {
            pool: pool.iter().map(AsRef::as_ref).collect(),
            board,
        }
    }

    /// Phrases the card was dealt from.
    pub fn pool(&self) -> &[&'a str] {
        &self.pool
    }

    /// The dealt card.
    pub fn board(&self) -> &Board {
        self.board
    }
}

pub mod fresh_board;
pub mod marks_match_history;
pub mod pool_coverage;
pub mod win_latch;

pub use fresh_board::FreshBoardInvariant;
pub use marks_match_history::MarksMatchHistoryInvariant;
pub use pool_coverage::PoolCoverageInvariant;
pub use win_latch::WinLatchInvariant;

/// Invariants every freshly generated card satisfies.
pub type FreshCardInvariants = (FreshBoardInvariant, PoolCoverageInvariant);

/// Invariants a card under play satisfies after every toggle.
pub type CardInvariants = (MarksMatchHistoryInvariant, WinLatchInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BingoCard, Cell, generate_board_with};

    fn phrases() -> Vec<String> {
        (0..16).map(|i| format!("p{i}")).collect()
    }

    #[test]
    fn test_fresh_set_holds_for_generated_card() {
        let pool = phrases();
        let board = generate_board_with(&pool, |p| p.rotate_left(3));
        assert!(FreshCardInvariants::check_all(&GeneratedCard::new(&pool, &board)).is_ok());
    }

    #[test]
    fn test_fresh_set_reports_every_violation() {
        let pool = phrases();
        let mut board = generate_board_with(&pool, |_| {});
        board.set_marked(Cell::new(0, 0).unwrap(), true);
        let other: Vec<String> = (0..16).map(|i| format!("q{i}")).collect();

        let violations = FreshCardInvariants::check_all(&GeneratedCard::new(&other, &board))
            .unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_card_set_holds_during_play() {
        let pool = phrases();
        let mut card = BingoCard::new(generate_board_with(&pool, |_| {}));
        for index in [0, 5, 10, 5, 15, 3] {
            card.toggle(Cell::from_index(index).unwrap());
            assert!(CardInvariants::check_all(&card).is_ok());
        }
    }
}
