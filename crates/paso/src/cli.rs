//! Command-line interface for paso.

use clap::{Parser, Subcommand};
use paso_bingo::{CampaignPhase, Theme};
use std::path::PathBuf;

/// P.A.S.O. - campaign bingo, acronyms and phase control
#[derive(Parser, Debug)]
#[command(name = "paso")]
#[command(about = "Campaign bingo, stable acronyms and phase gate", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $PASO_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the state file path
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the bingo card
    Bingo {
        /// Bingo action
        #[command(subcommand)]
        action: BingoAction,
    },

    /// Print the stable acronym for an entry id
    Acronym {
        /// Entry identifier
        id: String,
    },

    /// Show or change the campaign phase
    Phase {
        /// Phase action (defaults to show)
        #[command(subcommand)]
        action: Option<PhaseAction>,
    },

    /// List bingo themes
    Themes,
}

/// Bingo subcommands
#[derive(Subcommand, Debug)]
pub enum BingoAction {
    /// Deal a new card, replacing the current one
    New {
        /// Phrase theme (defaults to the configured theme)
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the current card
    Show,

    /// Toggle the tile at ROW COL (0-3)
    Mark {
        /// Row (0-3)
        row: usize,
        /// Column (0-3)
        col: usize,
    },
}

/// Phase subcommands
#[derive(Subcommand, Debug)]
pub enum PhaseAction {
    /// Print the current phase
    Show,

    /// Set the phase by number (1-4) or name
    Set {
        /// Target phase
        phase: CampaignPhase,
    },

    /// Move to the next phase
    Advance,
}
