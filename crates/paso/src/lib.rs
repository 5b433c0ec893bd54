//! P.A.S.O. command-line app library.
//!
//! # Architecture
//!
//! - **Config**: TOML configuration with defaults ([`PasoConfig`])
//! - **Store**: best-effort key/value JSON state ([`JsonFileStore`])
//! - **Service**: card, phase and acronym operations over a store
//!   ([`CampaignService`])
//! - **Report**: plain-text rendering of results for the terminal
//!
//! Card logic itself lives in [`paso_bingo`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;
mod service;
mod store;

pub use config::{CONFIG_ENV, ConfigError, PasoConfig};
pub use report::{render_card, render_phase, render_toggle};
pub use service::CampaignService;
pub use store::{CARD_KEY, JsonFileStore, MemoryStore, PHASE_KEY, StateStore, StoreError};
