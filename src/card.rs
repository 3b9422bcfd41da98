use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Card color. `Wild` only ever appears on wild cards, never as the active color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

/// The four colors that can be active, in tie-break precedence order.
pub const PLAYABLE_COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

impl Color {
    /// Returns true for the four colors that may become the active color.
    #[inline]
    pub fn is_playable(&self) -> bool {
        !matches!(self, Color::Wild)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Wild => "wild",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Numbered face between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    /// Draw penalty added to the stack when a card of this rank is played.
    #[inline]
    pub fn draw_penalty(&self) -> usize {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(value) => write!(f, "{value}"),
            Rank::Skip => f.write_str("Skip"),
            Rank::Reverse => f.write_str("Reverse"),
            Rank::DrawTwo => f.write_str("+2"),
            Rank::Wild => f.write_str("Wild"),
            Rank::WildDrawFour => f.write_str("Wild+4"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Action,
    Wild,
}

/// A single card. Cards are plain values; a game moves them between zones and never
/// creates or destroys one after the deal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const MAX_NUMBER: u8 = 9;

impl Card {
    pub const fn number(color: Color, value: u8) -> Self {
        Self {
            color,
            rank: Rank::Number(value),
        }
    }

    pub const fn action(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub const fn wild() -> Self {
        Self {
            color: Color::Wild,
            rank: Rank::Wild,
        }
    }

    pub const fn wild_draw_four() -> Self {
        Self {
            color: Color::Wild,
            rank: Rank::WildDrawFour,
        }
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        match self.rank {
            Rank::Number(_) => CardKind::Number,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => CardKind::Action,
            Rank::Wild | Rank::WildDrawFour => CardKind::Wild,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self.kind(), CardKind::Wild)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{} {}", self.color, self.rank)
        }
    }
}

/// Builds the full 108-card deck in deterministic order (unshuffled).
///
/// Per color: one 0, two each of 1-9, two each of Skip, Reverse and +2.
/// Then two plain Wild and two Wild+4, interleaved.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in PLAYABLE_COLORS {
        deck.push(Card::number(color, 0));
        for value in 1..=MAX_NUMBER {
            deck.push(Card::number(color, value));
            deck.push(Card::number(color, value));
        }
        for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
            deck.push(Card::action(color, rank));
            deck.push(Card::action(color, rank));
        }
    }
    for _ in 0..2 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

/// Returns a uniformly permuted copy of `cards`.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn full_deck_composition() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in &deck {
            *counts.entry(*card).or_default() += 1;
        }
        for color in PLAYABLE_COLORS {
            assert_eq!(counts[&Card::number(color, 0)], 1);
            for value in 1..=MAX_NUMBER {
                assert_eq!(counts[&Card::number(color, value)], 2);
            }
            for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
                assert_eq!(counts[&Card::action(color, rank)], 2);
            }
        }
        assert_eq!(counts[&Card::wild()], 2);
        assert_eq!(counts[&Card::wild_draw_four()], 2);
    }

    #[test]
    fn full_deck_is_deterministic() {
        assert_eq!(full_deck(), full_deck());
    }

    #[test]
    fn shuffle_preserves_contents_and_is_seeded() {
        let deck = full_deck();
        let a = shuffle(&deck, &mut StdRng::seed_from_u64(7));
        let b = shuffle(&deck, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_ne!(a, deck);
        let mut sorted_a = a.clone();
        let mut sorted_deck = deck.clone();
        sorted_a.sort_by_key(|card| format!("{card:?}"));
        sorted_deck.sort_by_key(|card| format!("{card:?}"));
        assert_eq!(sorted_a, sorted_deck);
    }

    #[test]
    fn shuffle_hits_every_position() {
        // Each of three cards should land in every slot across many shuffles.
        let cards = [
            Card::number(Color::Red, 1),
            Card::number(Color::Red, 2),
            Card::number(Color::Red, 3),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashMap::new();
        for _ in 0..600 {
            let order = shuffle(&cards, &mut rng);
            *seen.entry(order).or_insert(0usize) += 1;
        }
        assert_eq!(seen.len(), 6);
        assert!(seen.values().all(|&count| count > 50));
    }

    #[test]
    fn kinds() {
        assert_eq!(Card::number(Color::Blue, 4).kind(), CardKind::Number);
        assert_eq!(Card::action(Color::Blue, Rank::Skip).kind(), CardKind::Action);
        assert!(Card::wild_draw_four().is_wild());
        assert!(!Color::Wild.is_playable());
    }
}
