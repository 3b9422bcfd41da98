use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, Color, PLAYABLE_COLORS, Rank};
use crate::rules::can_play;
use crate::state::GameStateView;

/// Hand size at or below which the bot is willing to spend a Wild+4 outside of a stack.
const WILD_DRAW_FOUR_HAND_LIMIT: usize = 3;

/// Pending stack a +2 may be stacked onto.
const DRAW_TWO_STACKABLE: usize = 2;

/// Rule-based opponent that decides from its own hand and the public table only.
///
/// In plain English:
/// - Facing a draw stack, take the whole stack unless holding a +2 (only onto a bare +2)
///   or a Wild+4; when holding one, choose from the playable cards as usual.
/// - With nothing playable, draw one card.
/// - Otherwise play, in order of preference: +2, Skip, Reverse, Wild+4 (only when holding
///   three cards or fewer), any colored card, and finally the first playable wild.
/// - For a wild, name the color held most often in the rest of the hand, breaking ties
///   red, yellow, green, blue.
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    /// Playable hand indices. Empty while a draw stack is pending and the hand
    /// holds nothing that may answer it.
    fn candidates(state: &GameStateView) -> Vec<usize> {
        if state.pending_draw > 0
            && !state
                .hand
                .iter()
                .any(|card| Self::can_stack(card, state.pending_draw))
        {
            return Vec::new();
        }
        state
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| can_play(card, &state.top_card, state.active_color))
            .map(|(index, _)| index)
            .collect()
    }

    fn can_stack(card: &Card, pending_draw: usize) -> bool {
        match card.rank {
            Rank::DrawTwo => pending_draw == DRAW_TWO_STACKABLE,
            Rank::WildDrawFour => true,
            _ => false,
        }
    }

    /// Picks among playable indices by fixed rank priority.
    pub fn choose_index(hand: &[Card], playable: &[usize]) -> Option<usize> {
        let first = |pred: fn(&Card) -> bool| playable.iter().copied().find(|&i| pred(&hand[i]));
        first(|card| card.rank == Rank::DrawTwo)
            .or_else(|| first(|card| card.rank == Rank::Skip))
            .or_else(|| first(|card| card.rank == Rank::Reverse))
            .or_else(|| {
                if hand.len() <= WILD_DRAW_FOUR_HAND_LIMIT {
                    first(|card| card.rank == Rank::WildDrawFour)
                } else {
                    None
                }
            })
            .or_else(|| first(|card| !card.is_wild()))
            .or_else(|| playable.first().copied())
    }

    /// Most frequent color among the non-wild cards left after playing `played`.
    pub fn choose_color(hand: &[Card], played: usize) -> Color {
        let mut counts = [0usize; PLAYABLE_COLORS.len()];
        for (index, card) in hand.iter().enumerate() {
            if index == played {
                continue;
            }
            if let Some(slot) = PLAYABLE_COLORS.iter().position(|color| *color == card.color) {
                counts[slot] += 1;
            }
        }
        let mut best = 0;
        for slot in 1..counts.len() {
            if counts[slot] > counts[best] {
                best = slot;
            }
        }
        PLAYABLE_COLORS[best]
    }

    /// Intent for the player whose perspective `state` is.
    pub fn decide(state: &GameStateView) -> Action {
        let candidates = Self::candidates(state);
        let Some(index) = Self::choose_index(&state.hand, &candidates) else {
            return Action::Draw;
        };
        if state.hand[index].is_wild() {
            Action::play_wild(index, Self::choose_color(&state.hand, index))
        } else {
            Action::play(index)
        }
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for HeuristicBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        let action = Self::decide(state);
        if legal_actions.contains(&action) {
            action
        } else {
            Action::Draw
        }
    }
}
