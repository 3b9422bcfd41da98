use std::fmt::Write;

use crate::action::{Action, PlayerId};
use crate::card::Card;
use crate::event::GameEvent;
use crate::state::{Direction, GameStateView, GameStatus};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_pile_sizes: bool,
    pub show_hand_indices: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_pile_sizes: true,
            show_hand_indices: true,
        }
    }
}

/// Fine tune textual action descriptions.
#[derive(Clone, Copy, Debug)]
pub struct DescribeOptions {
    pub include_card_details: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            include_card_details: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => {
            format!("Finished (winner: {})", player_name(state, winner))
        }
    };
    let _ = writeln!(out, "Game status: {status}");
    let direction = match state.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let _ = writeln!(
        out,
        "Top card: {}  |  Active color: {}  |  Direction: {direction}",
        format_card(state.top_card),
        state.active_color
    );
    if state.pending_draw > 0 {
        let _ = writeln!(out, "Pending draw: {}", state.pending_draw);
    }
    if options.show_pile_sizes {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            state.draw_pile_count, state.discard_pile_count
        );
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.id == state.self_player {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let uno_tag = if player.hand_size == 1 { " UNO!" } else { "" };
        let _ = writeln!(
            out,
            "  {}{} - {} cards{}{}",
            player.name, label_you, player.hand_size, uno_tag, current_tag
        );
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = state
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if options.show_hand_indices {
                    format!("{idx}:{}", format_card(*card))
                } else {
                    format_card(*card)
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    describe_action_with_options(state, action, DescribeOptions::default())
}

pub fn describe_action_with_options(
    state: &GameStateView,
    action: &Action,
    options: DescribeOptions,
) -> String {
    match action {
        Action::Play { hand_index, color } => {
            let card = state.hand.get(*hand_index).copied();
            let mut text = match card {
                Some(card) if options.include_card_details => {
                    format!("Play hand[{hand_index}] {}", format_card(card))
                }
                _ => format!("Play hand[{hand_index}]"),
            };
            if let Some(color) = color {
                let _ = write!(text, " as {color}");
            }
            text
        }
        Action::Draw if state.pending_draw > 0 => {
            format!("Draw {} (penalty)", state.pending_draw)
        }
        Action::Draw => String::from("Draw a card"),
    }
}

/// Default wording for a transition event.
pub fn describe_event(state: &GameStateView, event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted {
            starter,
            active_color,
            first_player,
        } => format!(
            "Cards dealt. Starter {} ({active_color}), {} goes first",
            format_card(*starter),
            player_name(state, *first_player)
        ),
        GameEvent::Played {
            player,
            card,
            active_color,
        } => {
            if card.is_wild() {
                format!(
                    "{} played {} and chose {active_color}",
                    player_name(state, *player),
                    format_card(*card)
                )
            } else {
                format!("{} played {}", player_name(state, *player), format_card(*card))
            }
        }
        GameEvent::Skipped { player } => format!("{} is skipped!", player_name(state, *player)),
        GameEvent::Reversed { player, .. } => {
            format!("{} reversed direction!", player_name(state, *player))
        }
        GameEvent::DrawPenalty { added, total, .. } => {
            format!("+{added} draw penalty! Stack is {total}")
        }
        GameEvent::Drew {
            player,
            count,
            penalty,
        } => {
            if *penalty {
                format!("{} drew {count} cards", player_name(state, *player))
            } else {
                format!("{} draws", player_name(state, *player))
            }
        }
        GameEvent::PileRecycled { cards } => {
            format!("Discard pile reshuffled into {cards} new draw cards")
        }
        GameEvent::Uno { player } => format!("{} - UNO!", player_name(state, *player)),
        GameEvent::Won { player } => format!("{} wins the round", player_name(state, *player)),
    }
}

fn player_name(state: &GameStateView, id: PlayerId) -> String {
    state
        .players
        .iter()
        .find(|player| player.id == id)
        .map(|player| player.name.clone())
        .unwrap_or_else(|| format!("Player {}", id + 1))
}

fn format_card(card: Card) -> String {
    card.to_string()
}
