//! Text rendering of actions, options and table events for the console.
//!
//! Pure functions: they build strings and never write, so the console and
//! the tests share them.

use parlor_engine::cards::format_cards;
use parlor_engine::controller::{SeatView, TableEvent};
use parlor_engine::rules::{ActionOptions, ValidatedAction};

/// Format a validated action for the table log.
///
/// ```rust
/// use parlor_engine::rules::ValidatedAction;
/// # use parlor_cli::formatters::format_action;
///
/// assert_eq!(format_action(&ValidatedAction::Raise { to_call: 2, by: 1 }), "calls 2 and raises 1");
/// assert_eq!(format_action(&ValidatedAction::Check), "checks");
/// ```
pub fn format_action(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Check => "checks".to_string(),
        ValidatedAction::Bet(n) => format!("bets {}", n),
        ValidatedAction::Call(n) => format!("calls {}", n),
        ValidatedAction::Raise { to_call, by } => format!("calls {} and raises {}", to_call, by),
        ValidatedAction::Fold => "folds".to_string(),
        ValidatedAction::AllIn(n) => format!("is all-in for {}", n),
    }
}

/// The prompt hint listing what the player may type right now.
pub fn format_options(options: &ActionOptions) -> String {
    match *options {
        ActionOptions::Opening { min_bet, max_bet } => {
            format!("check, bet {}-{}", min_bet, max_bet)
        }
        ActionOptions::Facing {
            to_call,
            min_raise,
            max_raise,
        } => format!("call {}, raise {}-{}, fold", to_call, min_raise, max_raise),
        ActionOptions::ShortStack { chips, .. } => format!("allin ({}), fold", chips),
    }
}

fn format_seat(seat: &SeatView) -> String {
    if seat.in_round {
        format!("{:<12} {:>4} chips  {}", seat.name, seat.chips, seat.cards)
    } else {
        format!("{:<12} {:>4} chips  [folded]", seat.name, seat.chips)
    }
}

/// Lines to show for a table event. Standings are printed by the session
/// itself, so they render to nothing here.
pub fn render_event(event: &TableEvent) -> Vec<String> {
    match event {
        TableEvent::RoundStarted {
            round,
            variant,
            dealer,
            players,
        } => vec![format!(
            "=== Round {}: {} ({} players, {} deals) ===",
            round,
            variant,
            players.len(),
            dealer
        )],
        TableEvent::AnteCollected { total, pot } => {
            vec![format!("Ante collected: {} (pot {})", total, pot)]
        }
        TableEvent::TableView {
            seats,
            community,
            pot,
        } => {
            let mut lines = Vec::with_capacity(seats.len() + 2);
            if !community.is_empty() {
                lines.push(format!("Community: {}", format_cards(community.iter())));
            }
            lines.extend(seats.iter().map(format_seat));
            lines.push(format!("Pot: {}", pot));
            lines
        }
        TableEvent::ActionTaken {
            name,
            action,
            chips,
            pot,
            ..
        } => vec![format!(
            "{} {} ({} left, pot {})",
            name,
            format_action(action),
            chips,
            pot
        )],
        TableEvent::Discarded { name, count } => match count {
            0 => vec![format!("{} stands pat", name)],
            1 => vec![format!("{} draws 1 card", name)],
            n => vec![format!("{} draws {} cards", name, n)],
        },
        TableEvent::DiscardsReshuffled { cards } => {
            vec![format!("Deck empty: {} discards shuffled back in", cards)]
        }
        TableEvent::EarlyWin { name, pot } => {
            vec![format!("Everyone else folded. {} takes {}", name, pot)]
        }
        TableEvent::Showdown {
            hands,
            winners,
            shares,
        } => {
            let mut lines = vec!["Showdown:".to_string()];
            lines.extend(
                hands
                    .iter()
                    .map(|h| format!("  {:<12} {}  {}", h.name, h.hand, h.category)),
            );
            let paid: Vec<String> = shares
                .iter()
                .map(|(name, amount)| format!("{} +{}", name, amount))
                .collect();
            let verb = if winners.len() == 1 { "Winner" } else { "Split" };
            lines.push(format!("{}: {}", verb, paid.join(", ")));
            lines
        }
        TableEvent::Standings { .. } => Vec::new(),
        TableEvent::RoundAborted {
            reason,
            pot_carried,
        } => vec![format!(
            "Round aborted: {}. Pot of {} carries over",
            reason, pot_carried
        )],
    }
}
