//! Plain-text rendering for terminal output.

use paso_bingo::{BingoCard, CampaignPhase, TILE_COUNT, ToggleOutcome};

/// Renders a card with its mark count and win status.
pub fn render_card(card: &BingoCard) -> String {
    let board = card.board();
    let mut out = board.display();
    out.push_str(&format!("\n\n{} of {TILE_COUNT} marked", board.marked_count()));
    match (card.has_won(), card.current_line()) {
        (true, Some(line)) => out.push_str(&format!(" | BINGO ({line})")),
        (true, None) => out.push_str(" | BINGO (already claimed)"),
        (false, _) => {}
    }
    out
}

/// Renders the result of a toggle. The bingo announcement appears only on
/// the winning toggle.
pub fn render_toggle(card: &BingoCard, outcome: &ToggleOutcome) -> String {
    let verb = if outcome.marked { "Marked" } else { "Unmarked" };
    let text = &card.board().get(outcome.cell).text;
    let mut out = format!("{verb} {} \"{text}\"", outcome.cell);
    if let Some(win) = outcome.win {
        out.push_str(&format!(
            "\n\n¡BINGO! {} completed after {} toggles.",
            win.line, win.toggles
        ));
    }
    out
}

/// Renders the campaign phase and the name it allows.
pub fn render_phase(phase: CampaignPhase, display_name: &str) -> String {
    let gate = if phase.is_reveal() {
        "union branding revealed"
    } else {
        "union branding hidden"
    };
    format!("Phase {phase}: {gate}. Showing as \"{display_name}\".")
}
