//! Pure rule helpers: play legality and the turn-order effect of a played card.

use crate::action::PlayerId;
use crate::card::{Card, Color, Rank};
use crate::state::Direction;

/// Checks whether `card` may be played on `top` while `active_color` is required.
///
/// Wilds always match. Otherwise the card must share the active color or the top
/// card's rank; the top card's own printed color is not consulted.
#[inline]
pub fn can_play(card: &Card, top: &Card, active_color: Color) -> bool {
    card.is_wild() || card.color == active_color || card.rank == top.rank
}

/// Result of applying a played card to turn order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EffectOutcome {
    pub next_player: PlayerId,
    pub direction: Direction,
    pub added_draw: usize,
    pub skipped: Option<PlayerId>,
    pub reversed: bool,
}

/// Computes who plays next after `current` played `card`.
pub fn resolve_effect(
    card: &Card,
    current: PlayerId,
    direction: Direction,
    num_players: usize,
) -> EffectOutcome {
    let mut outcome = EffectOutcome {
        next_player: direction.step(current, num_players),
        direction,
        added_draw: 0,
        skipped: None,
        reversed: false,
    };
    match card.rank {
        Rank::Reverse => {
            outcome.direction = direction.flipped();
            outcome.next_player = outcome.direction.step(current, num_players);
            outcome.reversed = true;
        }
        Rank::Skip => {
            outcome.skipped = Some(outcome.next_player);
            outcome.next_player = direction.step(outcome.next_player, num_players);
        }
        Rank::DrawTwo | Rank::WildDrawFour => {
            outcome.added_draw = card.rank.draw_penalty();
        }
        Rank::Number(_) | Rank::Wild => {}
    }
    outcome
}
