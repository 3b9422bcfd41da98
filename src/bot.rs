use crate::action::Action;
use crate::state::GameStateView;

/// Interface for anything that chooses a seat's intent.
///
/// Bots only ever see a [`GameStateView`], which carries their own hand and the
/// public table; other players' hands are reduced to their sizes.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;
}
