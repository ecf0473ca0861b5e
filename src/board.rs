//! The board: a grid of dealt cards with position-based lookup.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::geom::{Point, Rect};
use crate::options::GameOptions;
use crate::scene::{Drawable, Scene};

/// Stable handle to a card slot on a [`Board`].
///
/// Ids are indices into the board's slot arena, so they survive the removal
/// of other cards. Holding the id of a removed card is harmless: every
/// lookup returns `None` and every mutation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(usize);

/// A card dealt onto the board, together with its presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCard {
    /// The card identity.
    card: Card,
    /// Whether the card is currently face up.
    face_up: bool,
    /// Center of the card in scene coordinates.
    pos: Point,
}

impl PlacedCard {
    /// Creates a face-down card at the origin.
    const fn new(card: Card) -> Self {
        Self {
            card,
            face_up: false,
            pos: Point::new(0, 0),
        }
    }

    /// Returns the card identity.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggles the card between face up and face down.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Returns the center of the card in scene coordinates.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.pos
    }

    /// Moves the card's center to `pos`. No bounds are checked.
    pub const fn set_position(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Returns whether `point` lies on this card, for a card of the given
    /// pixel size centered at the card's position.
    #[must_use]
    pub const fn was_clicked(&self, point: Point, width: i32, height: i32) -> bool {
        Rect::from_center(self.pos, width, height).contains(point)
    }

    /// Returns the drawable for this card at the given pixel size.
    ///
    /// Face down is the constant card-back placeholder; face up is a labeled
    /// rectangle in the card's color.
    #[must_use]
    pub fn drawable(&self, width: i32, height: i32) -> Drawable {
        if self.face_up {
            Drawable::CardFace {
                width,
                height,
                label: self.card.label(),
                color: self.card.color(),
            }
        } else {
            Drawable::CardBack { width, height }
        }
    }
}

/// A fixed grid of cards dealt from a deck.
///
/// Cards are stored in deal order (row-major grid scan). Removal vacates a
/// slot rather than shifting the rest, so [`CardId`]s stay valid for the
/// whole game and iteration keeps following deal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Card slots in deal order; `None` marks a removed card.
    slots: Vec<Option<PlacedCard>>,
    /// The options the board was dealt with; hit-testing and rendering read
    /// their geometry from here so the two can never disagree.
    options: GameOptions,
}

impl Board {
    /// Deals a `rows x cols` board from `deck`, assigning each card the
    /// center of its grid cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty, has an odd number of cells, or
    /// asks for more cards than the deck holds.
    pub fn deal(deck: &mut Deck, options: GameOptions) -> Result<Self, DealError> {
        if options.cell_count() == 0 {
            return Err(DealError::EmptyGrid);
        }
        if options.cell_count() % 2 != 0 {
            return Err(DealError::OddCellCount);
        }

        let mut slots = Vec::with_capacity(options.cell_count());

        for row in 0..options.rows {
            for col in 0..options.cols {
                let card = deck.draw().ok_or(DealError::NotEnoughCards)?;
                let mut placed = PlacedCard::new(card);
                placed.set_position(options.cell_center(row, col));
                slots.push(Some(placed));
            }
        }

        Ok(Self { slots, options })
    }

    /// Returns the id of the first remaining card under `point`, scanning in
    /// deal order, or `None` if the point misses every card.
    #[must_use]
    pub fn find_clicked(&self, point: Point) -> Option<CardId> {
        let width = self.options.card_width();
        let height = self.options.card_height();

        self.cards()
            .find(|(_, placed)| placed.was_clicked(point, width, height))
            .map(|(id, _)| id)
    }

    /// Returns the placed card for `id`, or `None` if it has been removed.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&PlacedCard> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Returns the card identity for `id`, or `None` if it has been removed.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.get(id).map(PlacedCard::card)
    }

    /// Flips the card for `id`. No-op if the card has been removed.
    pub fn flip(&mut self, id: CardId) {
        if let Some(placed) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            placed.flip();
        }
    }

    /// Removes the card for `id` from the board. Removing an already vacant
    /// slot is a no-op.
    pub fn remove(&mut self, id: CardId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Returns the remaining cards with their ids, in deal order.
    pub fn cards(&self) -> impl Iterator<Item = (CardId, &PlacedCard)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|placed| (CardId(index), placed)))
    }

    /// Returns the number of cards remaining on the board.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns whether every card has been removed.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns the options the board was dealt with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Renders the remaining cards into a fresh scene.
    #[must_use]
    pub fn render(&self) -> Scene {
        let mut scene = Scene::new(self.options.scene_width(), self.options.scene_height());
        let width = self.options.card_width();
        let height = self.options.card_height();

        for (_, placed) in self.cards() {
            scene.place(placed.position(), placed.drawable(width, height));
        }

        scene
    }
}
