//! Campaign phase and the reveal gate.
//!
//! The campaign runs anonymously through its first three phases. Union
//! branding may only be shown once the campaign reaches [`CampaignPhase::Revelacion`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Narrative phase of the campaign, strictly ordered.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum CampaignPhase {
    /// Phase 1: anonymous teasers.
    #[default]
    Intriga,
    /// Phase 2: interactive pages draw people in.
    Curiosidad,
    /// Phase 3: shared grievances surface.
    Conciencia,
    /// Phase 4: the union is revealed.
    Revelacion,
}

impl CampaignPhase {
    /// Phase number, 1 through 4.
    pub fn number(self) -> u8 {
        match self {
            Self::Intriga => 1,
            Self::Curiosidad => 2,
            Self::Conciencia => 3,
            Self::Revelacion => 4,
        }
    }

    /// Phase for a number 1 through 4.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::iter().find(|phase| phase.number() == number)
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Intriga => "Intriga",
            Self::Curiosidad => "Curiosidad",
            Self::Conciencia => "Conciencia",
            Self::Revelacion => "Revelación",
        }
    }

    /// The following phase, or `None` at the reveal.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns true if union-identifying content may be shown.
    pub fn is_reveal(self) -> bool {
        is_reveal_phase(self)
    }
}

impl std::fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}

/// Error parsing a campaign phase.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown campaign phase: {input}")]
pub struct PhaseParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for CampaignPhase {
    type Err = PhaseParseError;

    /// Accepts a phase number (`1`-`4`) or name, case-insensitive, with or
    /// without the accent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number).ok_or_else(|| PhaseParseError {
                input: s.to_string(),
            });
        }

        let wanted = trimmed.to_lowercase().replace('ó', "o");
        Self::iter()
            .find(|phase| phase.label().to_lowercase().replace('ó', "o") == wanted)
            .ok_or_else(|| PhaseParseError {
                input: s.to_string(),
            })
    }
}

/// True iff `phase` is the reveal phase.
#[instrument]
pub fn is_reveal_phase(phase: CampaignPhase) -> bool {
    phase == CampaignPhase::Revelacion
}

/// Picks the identifying text at the reveal phase and the neutral text
/// before it.
#[instrument(skip(identifying, neutral))]
pub fn reveal_or<'a>(phase: CampaignPhase, identifying: &'a str, neutral: &'a str) -> &'a str {
    if is_reveal_phase(phase) {
        identifying
    } else {
        neutral
    }
}
