//! Card generation from a phrase pool.
//!
//! The pool is copied, permuted, and dealt into the card in row-major order.
//! The permutation is injectable so callers can supply a seeded RNG or a
//! fixed ordering.

use crate::invariants::{FreshCardInvariants, GeneratedCard, InvariantSet};
use crate::{BOARD_SIZE, Board, Tile};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

/// Generates a card using the thread-local RNG.
#[instrument(skip(phrases), fields(pool = phrases.len()))]
pub fn generate_board<S: AsRef<str>>(phrases: &[S]) -> Board {
    generate_board_with_rng(phrases, &mut rand::thread_rng())
}

/// Generates a card using the given RNG for the shuffle.
#[instrument(skip(phrases, rng), fields(pool = phrases.len()))]
pub fn generate_board_with_rng<S, R>(phrases: &[S], rng: &mut R) -> Board
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    generate_board_with(phrases, |pool| pool.shuffle(rng))
}

/// Generates a card, letting `permute` reorder a working copy of the pool.
///
/// The first sixteen phrases of the permuted copy fill the card row by row.
/// Cells past the end of the pool receive the placeholder text. Extra phrases
/// are dropped. Every tile starts unmarked.
#[instrument(skip(phrases, permute), fields(pool = phrases.len()))]
pub fn generate_board_with<S, F>(phrases: &[S], permute: F) -> Board
where
    S: AsRef<str>,
    F: FnOnce(&mut [String]),
{
    let mut pool: Vec<String> = phrases.iter().map(|p| p.as_ref().to_owned()).collect();
    permute(&mut pool);

    if pool.len() < BOARD_SIZE * BOARD_SIZE {
        warn!(
            pool = pool.len(),
            "Phrase pool smaller than card, padding with placeholders"
        );
    }

    let mut dealt = pool.into_iter();
    let board = Board::from_rows(std::array::from_fn(|_| {
        std::array::from_fn(|_| dealt.next().map(Tile::new).unwrap_or_else(Tile::sentinel))
    }));
    debug!(dropped = dealt.count(), "Card generated");

    debug_assert!(
        FreshCardInvariants::check_all(&GeneratedCard::new(phrases, &board)).is_ok(),
        "Card generation postcondition failed"
    );

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, SENTINEL, TILE_COUNT};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("frase {i}")).collect()
    }

    #[test]
    fn test_identity_permutation_fills_row_major() {
        let phrases = pool(16);
        let board = generate_board_with(&phrases, |_| {});
        for cell in Cell::all() {
            assert_eq!(board.get(cell).text, phrases[cell.to_index()]);
        }
    }

    #[test]
    fn test_permutation_is_applied() {
        let phrases = pool(16);
        let board = generate_board_with(&phrases, |p| p.reverse());
        assert_eq!(board.get(Cell::new(0, 0).unwrap()).text, "frase 15");
        assert_eq!(board.get(Cell::new(3, 3).unwrap()).text, "frase 0");
    }

    #[test]
    fn test_empty_pool_is_all_placeholders() {
        let phrases: Vec<String> = Vec::new();
        let board = generate_board(&phrases);
        assert!(board.tiles().all(|t| t.text == SENTINEL && !t.marked));
    }

    #[test]
    fn test_oversized_pool_drops_extras() {
        let phrases = pool(20);
        let board = generate_board_with(&phrases, |_| {});
        assert_eq!(board.tiles().count(), TILE_COUNT);
        assert!(board.tiles().all(|t| !t.is_sentinel()));
        assert!(!board.tiles().any(|t| t.text == "frase 16"));
    }

    #[test]
    fn test_same_seed_same_card() {
        let phrases = pool(24);
        let a = generate_board_with_rng(&phrases, &mut StdRng::seed_from_u64(7));
        let b = generate_board_with_rng(&phrases, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_pool_untouched() {
        let phrases = pool(16);
        let copy = phrases.clone();
        let _ = generate_board_with_rng(&phrases, &mut StdRng::seed_from_u64(1));
        assert_eq!(phrases, copy);
    }
}
