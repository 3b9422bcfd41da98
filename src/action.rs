use serde::{Deserialize, Serialize};

use crate::card::Color;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Intent a player can submit on its turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `hand_index`. `color` is required for wild cards and ignored otherwise.
    Play {
        hand_index: usize,
        color: Option<Color>,
    },
    /// Draw one card, or the whole pending stack, and end the turn.
    Draw,
}

impl Action {
    pub fn play(hand_index: usize) -> Self {
        Action::Play {
            hand_index,
            color: None,
        }
    }

    pub fn play_wild(hand_index: usize, color: Color) -> Self {
        Action::Play {
            hand_index,
            color: Some(color),
        }
    }

    /// Returns the hand index if the action is a play.
    pub fn hand_index(&self) -> Option<usize> {
        match self {
            Action::Play { hand_index, .. } => Some(*hand_index),
            Action::Draw => None,
        }
    }
}
