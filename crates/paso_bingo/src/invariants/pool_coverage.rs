//! Pool coverage invariant: a card only shows phrases dealt from its pool.

use super::{GeneratedCard, Invariant};
use crate::{SENTINEL, TILE_COUNT};
use std::collections::HashMap;

/// Invariant: the card's texts are drawn from the pool without replacement.
///
/// Each phrase appears on the card at most as often as it appears in the
/// pool. Placeholder tiles fill the cells the pool could not.
pub struct PoolCoverageInvariant;

impl Invariant<GeneratedCard<'_>> for PoolCoverageInvariant {
    fn holds(card: &GeneratedCard<'_>) -> bool {
        let mut available: HashMap<&str, usize> = HashMap::new();
        for phrase in card.pool() {
            *available.entry(*phrase).or_default() += 1;
        }
        let padding = TILE_COUNT.saturating_sub(card.pool().len());
        *available.entry(SENTINEL).or_default() += padding;

        card.board().tiles().all(|tile| match available.get_mut(tile.text.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
    }

    fn description() -> &'static str {
        "Card texts are dealt from the pool, padded with placeholders"
    }
}
