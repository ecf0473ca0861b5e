//! A concentration (memory matching) card game engine with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full turn cycle:
//! dealing a shuffled deck onto a grid, resolving picks against the board,
//! and producing a render-ready [`Scene`] for the host to draw. Rendering
//! backends and input plumbing stay outside; the engine consumes click
//! points and reset requests and nothing else.
//!
//! # Example
//!
//! ```
//! use concentration::{Game, GameOptions, Point};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42)?;
//!
//! // Reveal the card in the top-left grid cell.
//! assert!(game.point_clicked(options.cell_center(0, 0)).is_none());
//! let scene = game.current_scene();
//! assert!(!scene.items.is_empty());
//! # Ok::<(), concentration::DealError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod geom;
pub mod options;
pub mod scene;

// Re-export main types
pub use board::{Board, CardId, PlacedCard};
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use game::{Game, GameEvent, Stage};
pub use geom::{Point, Rect};
pub use options::GameOptions;
pub use scene::{Drawable, Scene, SceneItem};
