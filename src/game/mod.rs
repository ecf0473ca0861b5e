//! Game engine and turn state management.

use alloc::string::{String, ToString};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, CardId};
use crate::deck::Deck;
use crate::error::DealError;
use crate::geom::Point;
use crate::options::GameOptions;
use crate::scene::{Drawable, Scene};

pub mod state;

pub use state::Stage;

/// Message delivered when the last pair is cleared.
const WIN_MESSAGE: &str = "You Win!";
/// Caption under the match / no-match banner.
const CONTINUE_CAPTION: &str = "(Click anywhere to continue)";

/// Notification emitted by [`Game::point_clicked`] for the host to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The last pair has been cleared from the board. Emitted exactly once
    /// per game.
    Won {
        /// Message for the host to display.
        message: String,
    },
}

/// A concentration game engine that manages the board and the turn cycle.
///
/// The game consumes two kinds of input events, [`Game::point_clicked`] and
/// [`Game::reset`], and produces a render-ready [`Scene`] on demand. All
/// processing is synchronous; the host is responsible for serializing
/// events into these calls.
///
/// # Example
///
/// ```
/// use concentration::{Game, GameOptions, Stage};
///
/// let game = Game::new(GameOptions::default(), 42)?;
/// assert_eq!(game.stage(), Stage::PickingFirst);
/// assert_eq!(game.remaining_pairs(), 26);
/// # Ok::<(), concentration::DealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Master rng; every deal forks a deck rng from it, so resets reshuffle
    /// differently while the whole session replays from one seed.
    rng: ChaCha8Rng,
    /// The dealt board.
    board: Board,
    /// Current turn stage.
    stage: Stage,
    /// First pick of the current turn.
    pick1: Option<CardId>,
    /// Second pick of the current turn.
    pick2: Option<CardId>,
    /// Whether the current picks form a pair. Meaningful only in
    /// [`Stage::ShowingResult`].
    matched: bool,
    /// Pairs still on the board. The game is won when this reaches 0.
    remaining_pairs: u32,
}

impl Game {
    /// Creates a new game with the given seed: a fresh shuffled deck dealt
    /// onto a fresh board.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid is empty, has an odd number
    /// of cells, or needs more cards than a deck holds.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Self::fresh_board(options, &mut rng)?;

        Ok(Self {
            options,
            rng,
            board,
            stage: Stage::PickingFirst,
            pick1: None,
            pick2: None,
            matched: false,
            remaining_pairs: options.pair_count(),
        })
    }

    /// Shuffles a fresh deck with a rng forked from the master rng and deals
    /// a board from it. The deck is discarded once the board is dealt.
    fn fresh_board(options: GameOptions, rng: &mut ChaCha8Rng) -> Result<Board, DealError> {
        let mut deck = Deck::from_rng(ChaCha8Rng::from_rng(rng));
        deck.shuffle();
        Board::deal(&mut deck, options)
    }

    /// Reinitializes the whole game: fresh shuffled deck, fresh board, turn
    /// cycle back at [`Stage::PickingFirst`], pair count restored.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be dealt; with options already
    /// validated by [`Game::new`] this does not happen.
    pub fn reset(&mut self) -> Result<(), DealError> {
        self.board = Self::fresh_board(self.options, &mut self.rng)?;
        self.stage = Stage::PickingFirst;
        self.pick1 = None;
        self.pick2 = None;
        self.matched = false;
        self.remaining_pairs = self.options.pair_count();
        Ok(())
    }

    /// Handles a click at `point` in scene coordinates.
    ///
    /// In the picking stages a click reveals the card under the point (a
    /// miss, or re-clicking the first pick, changes nothing). In
    /// [`Stage::ShowingResult`] any click resolves the turn: a matched pair
    /// leaves the board, an unmatched pair turns back face down.
    ///
    /// Returns [`GameEvent::Won`] when the click clears the last pair.
    pub fn point_clicked(&mut self, point: Point) -> Option<GameEvent> {
        match self.stage {
            Stage::ShowingResult => self.resolve_turn(),
            Stage::PickingFirst | Stage::PickingSecond => self.pick(point),
        }
    }

    /// Resolves the pending turn shown on screen. Click position is ignored.
    fn resolve_turn(&mut self) -> Option<GameEvent> {
        self.stage = Stage::PickingFirst;

        if self.matched {
            if let Some(id) = self.pick1 {
                self.board.remove(id);
            }
            if let Some(id) = self.pick2 {
                self.board.remove(id);
            }

            self.remaining_pairs = self.remaining_pairs.saturating_sub(1);
            if self.remaining_pairs == 0 {
                return Some(GameEvent::Won {
                    message: WIN_MESSAGE.to_string(),
                });
            }
        } else {
            // Undo the reveal of both picks.
            if let Some(id) = self.pick1 {
                self.board.flip(id);
            }
            if let Some(id) = self.pick2 {
                self.board.flip(id);
            }
        }

        None
    }

    /// Handles a click during one of the picking stages.
    fn pick(&mut self, point: Point) -> Option<GameEvent> {
        let chosen = self.board.find_clicked(point)?;

        if self.stage == Stage::PickingFirst {
            self.board.flip(chosen);
            self.pick1 = Some(chosen);
            self.stage = Stage::PickingSecond;
        } else if self.pick1 != Some(chosen) {
            self.board.flip(chosen);
            self.pick2 = Some(chosen);
            self.matched = self.picks_match(chosen);
            self.stage = Stage::ShowingResult;
        }

        None
    }

    /// Returns whether the first pick and `second` form a pair.
    fn picks_match(&self, second: CardId) -> bool {
        let first = self.pick1.and_then(|id| self.board.card(id));
        match (first, self.board.card(second)) {
            (Some(first), Some(second)) => first.is_match(&second),
            _ => false,
        }
    }

    /// Renders the current frame.
    ///
    /// The scene is recomputed on every call. While showing a turn result
    /// the board is overlaid with the match / no-match banner; once the
    /// board is cleared the scene is the win screen.
    #[must_use]
    pub fn current_scene(&self) -> Scene {
        if self.board.is_cleared() {
            return self.win_scene();
        }

        let mut scene = self.board.render();

        if self.stage == Stage::ShowingResult {
            let heading = if self.matched { "Match!" } else { "No Match!" };
            scene.place(
                Point::new(
                    self.options.scene_width() / 2,
                    self.options.scene_height() - 2 * self.options.card_height(),
                ),
                Drawable::Banner {
                    width: 4 * self.options.card_width(),
                    height: 3 * self.options.card_height(),
                    heading: heading.to_string(),
                    caption: Some(CONTINUE_CAPTION.to_string()),
                },
            );
        }

        scene
    }

    /// Renders the terminal win screen.
    fn win_scene(&self) -> Scene {
        let mut scene = Scene::new(self.options.scene_width(), self.options.scene_height());
        scene.place(
            Point::new(scene.width / 2, scene.height / 2),
            Drawable::Banner {
                width: scene.width,
                height: scene.height,
                heading: WIN_MESSAGE.to_string(),
                caption: None,
            },
        );
        scene
    }

    /// Returns the current turn stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns whether the current picks form a pair. Meaningful only in
    /// [`Stage::ShowingResult`].
    #[must_use]
    pub const fn matched(&self) -> bool {
        self.matched
    }

    /// Returns the number of pairs still on the board.
    #[must_use]
    pub const fn remaining_pairs(&self) -> u32 {
        self.remaining_pairs
    }

    /// Returns the current picks.
    #[must_use]
    pub const fn picks(&self) -> (Option<CardId>, Option<CardId>) {
        (self.pick1, self.pick2)
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}
