//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered deck of cards that owns its random source.
///
/// A fresh deck holds the canonical 52-card sequence: ranks ascending from
/// ace to king, suits cycling clubs, diamonds, hearts, spades within each
/// rank. Shuffling consumes the deck's own rng, so two decks seeded alike
/// shuffle alike.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in draw order (front of the `Vec` is drawn first).
    cards: Vec<Card>,
    /// Random number generator consumed by [`Deck::shuffle`].
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a canonically ordered deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a canonically ordered deck that shuffles with the given rng.
    #[must_use]
    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.rebuild();
        deck
    }

    /// Restores the canonical 52-card order, discarding any cards already
    /// drawn. The rng keeps its current state.
    pub fn rebuild(&mut self) {
        self.cards.clear();

        for rank in 1..=13 {
            for suit in Suit::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Uses the Fisher-Yates shuffle from [`rand::seq::SliceRandom`],
    /// consuming the deck's rng; the resulting order is reproducible for a
    /// given seed. Only meaningful before dealing.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the front card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Returns the cards remaining in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
