//! Card identity types and deck constants.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the canonical deck cycle.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display color of this suit.
    ///
    /// Clubs and spades are black; diamonds and hearts are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "\u{2663}",
            Self::Diamonds => "\u{2666}",
            Self::Hearts => "\u{2665}",
            Self::Spades => "\u{2660}",
        })
    }
}

/// Display color of a card, derived from its suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black (clubs, spades).
    Black,
    /// Red (diamonds, hearts).
    Red,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but are never produced by [`Deck`](crate::Deck), and a
    /// rank of 0 never matches any card.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the display color of this card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether this card and `other` form a pair.
    ///
    /// A pair is equal rank and equal color, not equal suit: the three of
    /// clubs matches the three of spades. Rank 0 never matches anything,
    /// itself included.
    #[must_use]
    pub fn is_match(&self, other: &Self) -> bool {
        self.rank != 0 && self.rank == other.rank && self.color() == other.color()
    }

    /// Returns whether this card and `other` are the same card (equal rank
    /// and equal suit).
    #[must_use]
    pub fn same_card(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// Returns the display label of this card's rank.
    ///
    /// Ace and the face cards render as `A`, `J`, `Q`, `K`; every other rank
    /// renders as its decimal numeral.
    #[must_use]
    pub fn rank_label(&self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            _ => self.rank.to_string(),
        }
    }

    /// Returns the full display label of this card, e.g. `Q of ♥`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} of {}", self.rank_label(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
