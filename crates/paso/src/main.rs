//! P.A.S.O. - unified CLI
//!
//! Deals and plays the campaign bingo card, prints stable acronyms and
//! manages the campaign phase.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BingoAction, Cli, Command, PhaseAction};
use paso::{CampaignService, JsonFileStore, PasoConfig, render_card, render_phase, render_toggle};
use paso_bingo::{Cell, Theme};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = PasoConfig::resolve(cli.config.as_deref())?;
    if let Some(state) = cli.state {
        config = config.with_state_path(state);
    }
    debug!(state_path = %config.state_path().display(), "Configuration resolved");

    let store = JsonFileStore::open(config.state_path())
        .with_context(|| format!("opening state file {}", config.state_path().display()))?;
    debug!(path = %store.path().display(), "State store ready");
    let mut service = CampaignService::new(store, config.acronyms().clone());

    match cli.command {
        Command::Bingo { action } => run_bingo(&mut service, &config, action),
        Command::Acronym { id } => {
            println!("{}", service.acronym(&id));
            Ok(())
        }
        Command::Phase { action } => run_phase(&mut service, &config, action),
        Command::Themes => {
            for theme in Theme::iter() {
                println!("{:<12} {} phrases", theme.label(), theme.phrases().len());
            }
            Ok(())
        }
    }
}

/// Runs a bingo subcommand.
#[instrument(skip(service, config))]
fn run_bingo(
    service: &mut CampaignService<JsonFileStore>,
    config: &PasoConfig,
    action: BingoAction,
) -> Result<()> {
    match action {
        BingoAction::New { theme, seed } => {
            let theme = theme.unwrap_or(*config.default_theme());
            let card = match seed {
                Some(seed) => service.new_card(theme, &mut StdRng::seed_from_u64(seed))?,
                None => service.new_card(theme, &mut rand::thread_rng())?,
            };
            println!("New {theme} card:\n\n{}", render_card(&card));
        }
        BingoAction::Show => match service.card()? {
            Some(card) => println!("{}", render_card(&card)),
            None => println!("No card in play. Deal one with `paso bingo new`."),
        },
        BingoAction::Mark { row, col } => {
            let cell = Cell::new(row, col)?;
            let (card, outcome) = service.toggle(cell)?;
            println!("{}\n\n{}", render_toggle(&card, &outcome), render_card(&card));
        }
    }
    Ok(())
}

/// Runs a phase subcommand.
#[instrument(skip(service, config))]
fn run_phase(
    service: &mut CampaignService<JsonFileStore>,
    config: &PasoConfig,
    action: Option<PhaseAction>,
) -> Result<()> {
    match action.unwrap_or(PhaseAction::Show) {
        PhaseAction::Show => {}
        PhaseAction::Set { phase } => service.set_phase(phase)?,
        PhaseAction::Advance => {
            service.advance_phase()?;
        }
    }

    let phase = service.phase()?;
    let name = service.display_name(config.union_name(), config.neutral_name())?;
    println!("{}", render_phase(phase, name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paso::StateStore;
    use paso_bingo::{AcronymDictionary, CampaignPhase};
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> CampaignService<JsonFileStore> {
        let store = JsonFileStore::open(dir.path().join("state.json")).expect("Open failed");
        CampaignService::new(store, AcronymDictionary::builtin())
    }

    #[test]
    fn test_mark_off_card_is_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut svc = service(&dir);
        let config = PasoConfig::default();

        run_bingo(&mut svc, &config, BingoAction::New { theme: None, seed: Some(5) })
            .expect("Deal failed");
        let before = svc.store().get(paso::CARD_KEY).expect("Get failed");

        let err = run_bingo(&mut svc, &config, BingoAction::Mark { row: 4, col: 0 })
            .expect_err("Row 4 is off the card");
        assert!(err.to_string().contains("outside the 4x4 card"));
        assert_eq!(svc.store().get(paso::CARD_KEY).expect("Get failed"), before);

        run_bingo(&mut svc, &config, BingoAction::Mark { row: 3, col: 0 }).expect("Mark failed");
        let card = svc.card().expect("Load failed").expect("Card present");
        assert_eq!(card.history().len(), 1);
    }

    #[test]
    fn test_mark_without_card_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut svc = service(&dir);
        let config = PasoConfig::default();

        assert!(run_bingo(&mut svc, &config, BingoAction::Mark { row: 0, col: 0 }).is_err());
        run_bingo(&mut svc, &config, BingoAction::Show).expect("Show without a card succeeds");
    }

    #[test]
    fn test_phase_commands() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut svc = service(&dir);
        let config = PasoConfig::default();

        run_phase(&mut svc, &config, None).expect("Show failed");
        run_phase(&mut svc, &config, Some(PhaseAction::Advance)).expect("Advance failed");
        assert_eq!(svc.phase().expect("Phase failed"), CampaignPhase::Curiosidad);

        run_phase(
            &mut svc,
            &config,
            Some(PhaseAction::Set {
                phase: CampaignPhase::Revelacion,
            }),
        )
        .expect("Set failed");
        run_phase(&mut svc, &config, Some(PhaseAction::Advance)).expect("Advance failed");
        assert_eq!(svc.phase().expect("Phase failed"), CampaignPhase::Revelacion);
    }
}
