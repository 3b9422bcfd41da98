use thiserror::Error;

use crate::action::PlayerId;
use crate::card::{Card, Color};

/// Errors that can occur when submitting an intent to the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotYourTurn,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// Both piles are empty apart from the top card. Only reachable if card
    /// conservation was already broken, so callers should treat it as fatal.
    #[error("draw pile and discard pile are exhausted")]
    PileExhausted,
}

/// Details of invalid user actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("{card} cannot be played on {top} while {active_color} is active")]
    IllegalCard {
        card: Card,
        top: Card,
        active_color: Color,
    },
    #[error("a color must be chosen when playing a wild card")]
    MissingColorChoice,
    #[error("{0} is not a playable color")]
    InvalidColorChoice(Color),
}
