//! A single 52-card deck, shuffled once per round and consumed from the top.

use crate::{Card, GameError};
use rand::Rng;

pub const DECK_SIZE: usize = 52;

/// The top of the deck is the end of `cards`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in index order, unshuffled.
    pub fn ordered() -> Self {
        Self {
            cards: (0..DECK_SIZE).filter_map(Card::from_index).collect(),
        }
    }

    /// Builds a fresh deck and applies a Fisher-Yates permutation.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// A deck that yields `cards` in the given order. Used for scripted rounds.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self { cards }
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order, next card first.
    #[cfg(test)]
    pub(crate) fn peek_order(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

/// Where a table gets the deck for each new round.
pub trait DeckSource {
    fn next_deck(&mut self) -> Deck;
}

/// Produces a freshly shuffled deck per round from the wrapped RNG.
pub struct ShuffledDecks<R> {
    rng: R,
}

impl<R: Rng> ShuffledDecks<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DeckSource for ShuffledDecks<R> {
    fn next_deck(&mut self) -> Deck {
        Deck::shuffled(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_deck_has_every_card_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), 52);

        let unique: HashSet<Card> = deck.peek_order().copied().collect();
        assert_eq!(unique.len(), 52);

        for suit in Suit::ALL {
            assert_eq!(deck.peek_order().filter(|c| c.suit == suit).count(), 13);
        }
        for rank in Rank::ALL {
            assert_eq!(deck.peek_order().filter(|c| c.rank == rank).count(), 4);
        }
    }

    #[test]
    fn test_repeated_shuffles_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let first = Deck::shuffled(&mut rng);
        let second = Deck::shuffled(&mut rng);
        assert_ne!(first, second);
        assert_ne!(first, Deck::ordered());
    }

    #[test]
    fn test_draw_shrinks_until_exhausted() {
        let mut deck = Deck::ordered();
        for expected in (0..52).rev() {
            deck.draw().unwrap();
            assert_eq!(deck.remaining(), expected);
        }
        assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_stacked_deck_draws_in_order() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let king = Card::new(Rank::King, Suit::Hearts);
        let mut deck = Deck::stacked(vec![ace, king]);
        assert_eq!(deck.draw(), Ok(ace));
        assert_eq!(deck.draw(), Ok(king));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_shuffled_decks_source() {
        let mut source = ShuffledDecks::new(ChaCha8Rng::seed_from_u64(1));
        let a = source.next_deck();
        let b = source.next_deck();
        assert_eq!(a.remaining(), 52);
        assert_ne!(a, b);
    }
}
