//! P.A.S.O. campaign core.
//!
//! Deterministic logic behind the campaign pages:
//!
//! - **Cards**: deal a 4x4 bingo card from a phrase pool ([`generate_board`])
//!   and play it ([`BingoCard`]).
//! - **Rules**: detect complete rows, columns and diagonals ([`check_win`]).
//! - **Acronyms**: stable identifier-to-acronym mapping
//!   ([`select_stable_acronym`]).
//! - **Phases**: gate union branding on the campaign phase
//!   ([`is_reveal_phase`]).
//!
//! # Example
//!
//! ```
//! use paso_bingo::{BingoCard, Cell, Theme, generate_board_with};
//!
//! let board = generate_board_with(Theme::Oficina.phrases(), |_| {});
//! let mut card = BingoCard::new(board);
//! for col in 0..4 {
//!     let outcome = card.toggle(Cell::new(0, col).unwrap());
//!     assert_eq!(outcome.win.is_some(), col == 3);
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod acronym;
mod card;
mod generator;
pub mod invariants;
mod phase;
pub mod rules;
mod themes;
mod types;

pub use acronym::{
    AcronymDictionary, AcronymError, BUILTIN_ACRONYMS, acronym_index, select_stable_acronym,
};
pub use card::{BingoCard, ToggleOutcome, WinEvent};
pub use generator::{generate_board, generate_board_with, generate_board_with_rng};
pub use phase::{CampaignPhase, PhaseParseError, is_reveal_phase, reveal_or};
pub use rules::{Line, LineError, check_win, winning_line, winning_lines};
pub use themes::{Theme, ThemeParseError};
pub use types::{BOARD_SIZE, Board, Cell, CellError, SENTINEL, TILE_COUNT, Tile};
