//! Campaign business logic over a state store.

use paso_bingo::{
    AcronymDictionary, BingoCard, CampaignPhase, Cell, Theme, ToggleOutcome, generate_board_with_rng,
    reveal_or,
};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::store::{CARD_KEY, PHASE_KEY, StateStore, StoreError};

/// Service layer for the bingo card and campaign phase.
///
/// Wraps a [`StateStore`] with load-modify-save operations. Every read goes
/// back to the store so state written by another run is picked up.
#[derive(Debug)]
pub struct CampaignService<S> {
    store: S,
    acronyms: AcronymDictionary,
}

impl<S: StateStore> CampaignService<S> {
    /// Creates a service backed by `store`.
    #[instrument(skip(store, acronyms))]
    pub fn new(store: S, acronyms: AcronymDictionary) -> Self {
        info!(acronyms = acronyms.len(), "Creating CampaignService");
        Self { store, acronyms }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Deals a new card from `theme` and replaces any stored card.
    #[instrument(skip(self, rng))]
    pub fn new_card<R: Rng + ?Sized>(
        &mut self,
        theme: Theme,
        rng: &mut R,
    ) -> Result<BingoCard, StoreError> {
        let card = BingoCard::new(generate_board_with_rng(theme.phrases(), rng));
        self.store.save(CARD_KEY, &card)?;
        info!(%theme, "New card dealt");
        Ok(card)
    }

    /// Returns the stored card, if any.
    ///
    /// A stored card whose marks or win flag disagree with its history is
    /// rejected.
    #[instrument(skip(self))]
    pub fn card(&self) -> Result<Option<BingoCard>, StoreError> {
        let Some(card) = self.store.load::<BingoCard>(CARD_KEY)? else {
            debug!("No stored card");
            return Ok(None);
        };

        if let Err(violations) = card.validate() {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Stored card is inconsistent");
            return Err(StoreError::new(format!(
                "Stored card is inconsistent: {}",
                descriptions
            )));
        }

        Ok(Some(card))
    }

    /// Toggles a tile on the stored card.
    ///
    /// The outcome carries a win event only on the toggle that first wins
    /// the card.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, cell: Cell) -> Result<(BingoCard, ToggleOutcome), StoreError> {
        let mut card = self
            .card()?
            .ok_or_else(|| StoreError::new("No card in play; deal one first"))?;

        let outcome = card.toggle(cell);
        self.store.save(CARD_KEY, &card)?;

        if let Some(win) = outcome.win {
            info!(line = %win.line, toggles = win.toggles, "Bingo");
        }
        Ok((card, outcome))
    }

    /// Returns the stored phase, defaulting to the first phase.
    #[instrument(skip(self))]
    pub fn phase(&self) -> Result<CampaignPhase, StoreError> {
        Ok(self
            .store
            .load::<CampaignPhase>(PHASE_KEY)?
            .unwrap_or_default())
    }

    /// Stores a new phase.
    #[instrument(skip(self))]
    pub fn set_phase(&mut self, phase: CampaignPhase) -> Result<(), StoreError> {
        self.store.save(PHASE_KEY, &phase)?;
        info!(%phase, "Campaign phase set");
        Ok(())
    }

    /// Moves to the next phase. Stays put at the reveal.
    #[instrument(skip(self))]
    pub fn advance_phase(&mut self) -> Result<CampaignPhase, StoreError> {
        let current = self.phase()?;
        match current.next() {
            Some(next) => {
                self.set_phase(next)?;
                Ok(next)
            }
            None => {
                debug!("Already at the reveal phase");
                Ok(current)
            }
        }
    }

    /// Picks the name to display for the current phase.
    #[instrument(skip(self, union_name, neutral_name))]
    pub fn display_name<'a>(
        &self,
        union_name: &'a str,
        neutral_name: &'a str,
    ) -> Result<&'a str, StoreError> {
        Ok(reveal_or(self.phase()?, union_name, neutral_name))
    }

    /// Stable acronym for an entry id.
    #[instrument(skip(self))]
    pub fn acronym(&self, id: &str) -> &str {
        self.acronyms.select(id)
    }
}
