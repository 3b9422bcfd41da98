use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::card::{Card, DECK_SIZE, Rank};
use unobot::{
    Action, Bot, GameBuilder, GameError, GameState, GameStatus, HeuristicBot, InvalidAction,
    RandomBot, can_play,
};

const STEP_LIMIT: usize = 1_500;

fn check_invariants(state: &GameState) {
    assert_eq!(state.card_count(), DECK_SIZE);
    assert!(!state.discard_pile().is_empty());
    assert!(state.active_color().is_playable());
    assert!(state.current_player() < state.players().len());
    match state.status() {
        GameStatus::Finished { winner } => assert!(state.players()[winner].hand.is_empty()),
        GameStatus::Ongoing => assert!(state.players().iter().all(|p| !p.hand.is_empty())),
    }
}

/// Seats a heuristic bot and a random bot alternately and plays until the game ends.
fn play_out(
    seed: u64,
    num_players: usize,
    mut on_step: impl FnMut(&GameState, &GameState, Action),
) {
    let mut state = GameBuilder::new(num_players)
        .and_then(|b| b.with_seed(seed).with_human_seat(None).build())
        .expect("valid game");
    check_invariants(&state);
    let mut heuristic = HeuristicBot::new();
    let mut random = RandomBot::new(StdRng::seed_from_u64(seed ^ 0x5EED));
    for _ in 0..STEP_LIMIT {
        if state.is_finished() {
            break;
        }
        let current = state.current_player();
        let view = state.state_view(current).expect("view");
        let legal = state.legal_actions(current).expect("legal actions");
        let action = if current % 2 == 0 {
            heuristic.select_action(&view, &legal)
        } else {
            random.select_action(&view, &legal)
        };
        let next = match state.apply_action(current, action) {
            Ok(transition) => transition.state,
            // Only possible once nearly every card sits in a hand.
            Err(GameError::PileExhausted) => break,
            Err(err) => panic!("legal action {action:?} rejected: {err}"),
        };
        check_invariants(&next);
        on_step(&state, &next, action);
        state = next;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Invariant: card conservation, non-wild active color and a valid current seat hold
    /// after every transition.
    #[test]
    fn invariants_hold_through_games(seed in any::<u64>(), players in 2usize..=10) {
        play_out(seed, players, |_, _, _| {});
    }

    /// Invariant: turn order moves exactly as the played card dictates.
    #[test]
    fn turn_advances_by_card_effect(seed in any::<u64>(), players in 2usize..=10) {
        play_out(seed, players, |before, after, action| {
            if after.is_finished() {
                assert!(matches!(action, Action::Play { .. }));
                assert_eq!(after.current_player(), before.current_player());
                return;
            }
            let n = before.players().len();
            let current = before.current_player();
            let step = |from: usize, direction: unobot::Direction| direction.step(from, n);
            let expected = match action {
                Action::Draw => step(current, before.direction()),
                Action::Play { .. } => match after.top_card().rank {
                    Rank::Skip => step(step(current, before.direction()), before.direction()),
                    Rank::Reverse => step(current, before.direction().flipped()),
                    _ => step(current, before.direction()),
                },
            };
            assert_eq!(after.current_player(), expected);
            if let Action::Play { .. } = action {
                let added = after.top_card().rank.draw_penalty();
                assert_eq!(after.pending_draw(), before.pending_draw() + added);
            } else {
                assert_eq!(after.pending_draw(), 0);
            }
        });
    }

    /// Invariant: a play succeeds exactly when the card is playable and a color is named for wilds.
    #[test]
    fn play_legality_matches_can_play(
        seed in any::<u64>(),
        players in 2usize..=6,
        index in 0usize..12,
    ) {
        let state = GameBuilder::new(players)
            .and_then(|b| b.with_seed(seed).build())
            .expect("valid game");
        let hand = &state.players()[0].hand;
        let result = state.play_card(0, index, Some(unobot::Color::Red));
        match hand.get(index) {
            None => prop_assert_eq!(
                result.unwrap_err(),
                GameError::from(InvalidAction::HandIndex(index))
            ),
            Some(card) => {
                let playable = can_play(card, &state.top_card(), state.active_color());
                prop_assert_eq!(result.is_ok(), playable);
                if !playable {
                    let is_illegal = matches!(
                        result,
                        Err(GameError::InvalidAction(InvalidAction::IllegalCard { .. }))
                    );
                    prop_assert!(is_illegal);
                }
            }
        }
    }

    /// Invariant: the starter card is never a wild and hands are dealt in full.
    #[test]
    fn deal_is_well_formed(seed in any::<u64>(), players in 2usize..=10) {
        let state = GameState::new_game(players, seed).expect("valid game");
        let starter: Card = state.top_card();
        prop_assert!(!starter.is_wild());
        prop_assert_eq!(state.active_color(), starter.color);
        prop_assert!(state.players().iter().all(|p| p.hand.len() == 7));
        prop_assert_eq!(state.card_count(), DECK_SIZE);
    }
}
