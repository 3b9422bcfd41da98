//! UNO-style shedding game engine with rule-based opponents.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod rules;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{HeuristicBot, HumanBot, RandomBot};
pub use crate::card::{Card, CardKind, Color, Rank};
pub use crate::error::{GameError, InvalidAction};
pub use crate::event::GameEvent;
pub use crate::game::{GameBuilder, GameConfig, GameState, Transition};
pub use crate::rules::{EffectOutcome, can_play, resolve_effect};
pub use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, Player, PlayerPublicState,
};
pub use crate::visualize::{
    DescribeOptions, VisualOptions, describe_action, describe_event, render_state,
};
