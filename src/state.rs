use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
    pub human_seat: Option<PlayerId>,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 10",
            ));
        }
        Ok(Self {
            num_players,
            hand_size: HAND_SIZE,
            human_seat: Some(0),
        })
    }
}

/// Turn order direction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Index of the seat one step away from `from` in this direction.
    pub fn step(self, from: PlayerId, num_players: usize) -> PlayerId {
        match self {
            Direction::Clockwise => (from + 1) % num_players,
            Direction::CounterClockwise => (from + num_players - 1) % num_players,
        }
    }
}

/// A seat at the table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub is_human: bool,
}

impl Player {
    pub fn new(id: PlayerId, is_human: bool) -> Self {
        let name = if is_human {
            String::from("You")
        } else {
            format!("Player {}", id + 1)
        };
        Self {
            id,
            name,
            hand: Vec::new(),
            is_human,
        }
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub is_human: bool,
    pub is_current: bool,
}

/// Game state snapshot from one player's perspective: its own hand plus public table state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top_card: Card,
    pub active_color: Color,
    pub pending_draw: usize,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}

impl GameStateView {
    pub fn is_my_turn(&self) -> bool {
        self.current_player == self.self_player && matches!(self.status, GameStatus::Ongoing)
    }
}
