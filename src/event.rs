use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color};
use crate::state::Direction;

/// Semantic notification produced by a transition, in the order things happened.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        starter: Card,
        active_color: Color,
        first_player: PlayerId,
    },
    Played {
        player: PlayerId,
        card: Card,
        active_color: Color,
    },
    Skipped {
        player: PlayerId,
    },
    Reversed {
        player: PlayerId,
        direction: Direction,
    },
    /// A +2 or Wild+4 raised the pending stack to `total`.
    DrawPenalty {
        player: PlayerId,
        added: usize,
        total: usize,
    },
    /// `penalty` is true when the draw resolved a pending stack.
    Drew {
        player: PlayerId,
        count: usize,
        penalty: bool,
    },
    PileRecycled {
        cards: usize,
    },
    Uno {
        player: PlayerId,
    },
    Won {
        player: PlayerId,
    },
}
