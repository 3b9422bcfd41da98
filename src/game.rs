use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::action::{Action, PlayerId};
use crate::bot::Bot;
use crate::card::{Card, Color, PLAYABLE_COLORS, full_deck, shuffle};
use crate::error::{GameError, InvalidAction};
use crate::event::GameEvent;
use crate::rules::{can_play, resolve_effect};
use crate::state::{Direction, GameSettings, GameStateView, GameStatus, Player, PlayerPublicState};

const DEFAULT_SEED: u64 = 0x0A0B_5EED_0A0B_5EED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
    pub hand_size: usize,
    pub human_seat: Option<PlayerId>,
}

impl GameConfig {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        let settings = GameSettings::new(num_players)?;
        Ok(Self {
            num_players,
            seed,
            hand_size: settings.hand_size,
            human_seat: settings.human_seat,
        })
    }
}

/// Builder that enables deterministic deck injection for testing and simulations.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` as-is instead of a shuffled full deck. The last card is the top:
    /// hands are dealt from the end, round-robin starting at player 0.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    /// Seat controlled by a person, or `None` for an all-bot table.
    pub fn with_human_seat(mut self, seat: Option<PlayerId>) -> Self {
        self.config.human_seat = seat;
        self
    }

    pub fn build(self) -> Result<GameState, GameError> {
        GameState::from_builder(self)
    }
}

/// New state plus the events that led to it.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Canonical game state.
///
/// Transitions take `&self` and return a fresh [`Transition`]; a rejected intent
/// returns an error and the original value is never touched. The RNG travels with
/// the state, so a transition is a pure function of the state and the intent.
#[derive(Clone, Debug)]
pub struct GameState {
    settings: GameSettings,
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    players: Vec<Player>,
    current_player: PlayerId,
    direction: Direction,
    active_color: Color,
    pending_draw: usize,
    status: GameStatus,
    rng: StdRng,
}

impl GameState {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    /// Shuffled game with `num_players` seats, seat 0 human.
    pub fn new_game(num_players: usize, seed: u64) -> Result<Self, GameError> {
        GameBuilder::new(num_players)?.with_seed(seed).build()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn pending_draw(&self) -> usize {
        self.pending_draw
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn top_card(&self) -> Card {
        // The discard pile is seeded at construction and only ever shrinks to one card.
        self.discard_pile[self.discard_pile.len() - 1]
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    /// Total cards across the draw pile, discard pile and every hand.
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_finished() && self.players[self.current_player].is_human
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        if perspective >= self.players.len() {
            return Err(GameError::InvalidPlayer(perspective));
        }
        let players = self
            .players
            .iter()
            .map(|player| PlayerPublicState {
                id: player.id,
                name: player.name.clone(),
                hand_size: player.hand.len(),
                is_human: player.is_human,
                is_current: player.id == self.current_player,
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            status: self.status,
            self_player: perspective,
            current_player: self.current_player,
            direction: self.direction,
            top_card: self.top_card(),
            active_color: self.active_color,
            pending_draw: self.pending_draw,
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            players,
            hand: self.players[perspective].hand.clone(),
        })
    }

    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        if self.is_finished() {
            return Ok(Vec::new());
        }
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        let top = self.top_card();
        let mut actions = Vec::new();
        for (hand_index, card) in self.players[player].hand.iter().enumerate() {
            if !can_play(card, &top, self.active_color) {
                continue;
            }
            if card.is_wild() {
                for color in PLAYABLE_COLORS {
                    actions.push(Action::play_wild(hand_index, color));
                }
            } else {
                actions.push(Action::play(hand_index));
            }
        }
        actions.push(Action::Draw);
        Ok(actions)
    }

    pub fn apply_action(&self, player: PlayerId, action: Action) -> Result<Transition, GameError> {
        match action {
            Action::Play { hand_index, color } => self.play_card(player, hand_index, color),
            Action::Draw => self.draw_cards(player),
        }
    }

    /// Asks `bot` for the current player's intent and applies it.
    pub fn step_with(&self, bot: &mut dyn Bot) -> Result<Transition, GameError> {
        if self.is_finished() {
            return Err(GameError::GameAlreadyOver);
        }
        let current = self.current_player;
        let view = self.state_view(current)?;
        let legal_actions = self.legal_actions(current)?;
        let action = bot.select_action(&view, &legal_actions);
        self.apply_action(current, action)
    }

    pub fn play_card(
        &self,
        player: PlayerId,
        hand_index: usize,
        chosen_color: Option<Color>,
    ) -> Result<Transition, GameError> {
        self.check_turn(player)?;
        let card = *self.players[player]
            .hand
            .get(hand_index)
            .ok_or(InvalidAction::HandIndex(hand_index))?;
        let top = self.top_card();
        if !can_play(&card, &top, self.active_color) {
            return Err(InvalidAction::IllegalCard {
                card,
                top,
                active_color: self.active_color,
            }
            .into());
        }
        let active_color = if card.is_wild() {
            match chosen_color {
                None => return Err(InvalidAction::MissingColorChoice.into()),
                Some(color) if !color.is_playable() => {
                    return Err(InvalidAction::InvalidColorChoice(color).into());
                }
                Some(color) => color,
            }
        } else {
            card.color
        };

        let mut next = self.clone();
        let mut events = Vec::new();
        next.players[player].hand.remove(hand_index);
        next.discard_pile.push(card);
        next.active_color = active_color;
        events.push(GameEvent::Played {
            player,
            card,
            active_color,
        });
        debug!(player, %card, %active_color, "card played");

        let remaining = next.players[player].hand.len();
        if remaining == 0 {
            next.status = GameStatus::Finished { winner: player };
            events.push(GameEvent::Won { player });
            info!(player, "game won");
            return Ok(Transition {
                state: next,
                events,
            });
        }
        if remaining == 1 {
            events.push(GameEvent::Uno { player });
        }

        let outcome = resolve_effect(&card, player, next.direction, next.players.len());
        if outcome.reversed {
            events.push(GameEvent::Reversed {
                player,
                direction: outcome.direction,
            });
        }
        if let Some(skipped) = outcome.skipped {
            events.push(GameEvent::Skipped { player: skipped });
        }
        if outcome.added_draw > 0 {
            next.pending_draw += outcome.added_draw;
            events.push(GameEvent::DrawPenalty {
                player,
                added: outcome.added_draw,
                total: next.pending_draw,
            });
        }
        next.direction = outcome.direction;
        next.current_player = outcome.next_player;
        Ok(Transition {
            state: next,
            events,
        })
    }

    pub fn draw_cards(&self, player: PlayerId) -> Result<Transition, GameError> {
        self.check_turn(player)?;
        let penalty = self.pending_draw > 0;
        let count = if penalty { self.pending_draw } else { 1 };

        let mut next = self.clone();
        let mut events = Vec::new();
        for _ in 0..count {
            let card = next.draw_card(&mut events)?;
            next.players[player].hand.push(card);
        }
        next.pending_draw = 0;
        next.current_player = next.direction.step(player, next.players.len());
        events.push(GameEvent::Drew {
            player,
            count,
            penalty,
        });
        debug!(player, count, penalty, "cards drawn");
        Ok(Transition {
            state: next,
            events,
        })
    }

    /// Deals a fresh game with the same settings, continuing this state's RNG stream.
    /// Accepted whether or not the current game is over.
    pub fn restart(&self) -> Result<Transition, GameError> {
        let mut rng = self.rng.clone();
        let deck = shuffle(&full_deck(), &mut rng);
        let state = Self::deal(self.settings, deck, rng)?;
        let events = vec![state.started_event()];
        Ok(Transition { state, events })
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let mut settings = GameSettings::new(config.num_players)?;
        if config.hand_size == 0 {
            return Err(GameError::InvalidConfiguration("hand size must be positive"));
        }
        if let Some(seat) = config.human_seat {
            if seat >= config.num_players {
                return Err(GameError::InvalidPlayer(seat));
            }
        }
        settings.hand_size = config.hand_size;
        settings.human_seat = config.human_seat;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let deck = match deck {
            Some(deck) => deck,
            None => shuffle(&full_deck(), &mut rng),
        };
        Self::deal(settings, deck, rng)
    }

    fn deal(settings: GameSettings, mut deck: Vec<Card>, rng: StdRng) -> Result<Self, GameError> {
        let dealt = settings.hand_size * settings.num_players;
        if deck.len() <= dealt {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal hands",
            ));
        }
        if deck[..deck.len() - dealt].iter().all(Card::is_wild) {
            return Err(GameError::InvalidConfiguration(
                "deck has no non-wild card to start the discard pile",
            ));
        }

        let mut players: Vec<Player> = (0..settings.num_players)
            .map(|id| Player::new(id, settings.human_seat == Some(id)))
            .collect();
        for _ in 0..settings.hand_size {
            for player in players.iter_mut() {
                let card = deck.pop().ok_or(GameError::InvalidConfiguration(
                    "deck exhausted while dealing hands",
                ))?;
                player.hand.push(card);
            }
        }

        // Wilds revealed while looking for a starter go to the bottom of the pile.
        let starter = loop {
            let card = deck.pop().ok_or(GameError::InvalidConfiguration(
                "deck exhausted while revealing the starter",
            ))?;
            if card.is_wild() {
                deck.insert(0, card);
            } else {
                break card;
            }
        };

        let state = GameState {
            settings,
            draw_pile: deck,
            discard_pile: vec![starter],
            players,
            current_player: 0,
            direction: Direction::Clockwise,
            active_color: starter.color,
            pending_draw: 0,
            status: GameStatus::Ongoing,
            rng,
        };
        info!(
            players = settings.num_players,
            starter = %starter,
            "new game dealt"
        );
        Ok(state)
    }

    /// Event describing the opening table, for callers that render the deal.
    pub fn started_event(&self) -> GameEvent {
        GameEvent::GameStarted {
            starter: self.top_card(),
            active_color: self.active_color,
            first_player: self.current_player,
        }
    }

    fn check_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameAlreadyOver);
        }
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn draw_card(&mut self, events: &mut Vec<GameEvent>) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            self.recycle_pile(events)?;
        }
        self.draw_pile.pop().ok_or(GameError::PileExhausted)
    }

    /// Shuffles everything under the top discard into a new draw pile.
    fn recycle_pile(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        if self.discard_pile.len() <= 1 {
            error!(
                cards_in_hands = self.card_count() - self.discard_pile.len(),
                "no cards left to recycle into the draw pile"
            );
            return Err(GameError::PileExhausted);
        }
        let split = self.discard_pile.len() - 1;
        let top = self.discard_pile.split_off(split);
        self.draw_pile = shuffle(&self.discard_pile, &mut self.rng);
        self.discard_pile = top;
        events.push(GameEvent::PileRecycled {
            cards: self.draw_pile.len(),
        });
        debug!(cards = self.draw_pile.len(), "discard pile recycled");
        Ok(())
    }
}
