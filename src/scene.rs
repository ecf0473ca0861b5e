//! Render-ready scene types the host draws each frame.
//!
//! The engine never draws anything itself. Every state-changing event is
//! followed by the host pulling a fresh [`Scene`] from
//! [`Game::current_scene`](crate::Game::current_scene) and rendering its
//! items however it likes (canvas, terminal, test assertions).

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Color;
use crate::geom::Point;

/// A single drawable shape, sized in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawable {
    /// The constant face-down card placeholder: an outlined rectangle.
    CardBack {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
    },
    /// A face-up card: an outlined rectangle with a centered label, both in
    /// the card's color.
    CardFace {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Display label, e.g. `Q of ♥`.
        label: String,
        /// Outline and label color.
        color: Color,
    },
    /// An outlined banner with a heading and an optional caption below it.
    Banner {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Heading text.
        heading: String,
        /// Smaller caption below the heading.
        caption: Option<String>,
    },
}

/// A drawable placed in the scene, centered at `pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneItem {
    /// Center of the drawable in scene coordinates.
    pub pos: Point,
    /// The shape to draw.
    pub drawable: Drawable,
}

/// A full frame of drawables.
///
/// Items are ordered back to front; later items overlay earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Scene width in pixels.
    pub width: i32,
    /// Scene height in pixels.
    pub height: i32,
    /// Drawables in painting order.
    pub items: Vec<SceneItem>,
}

impl Scene {
    /// Creates an empty scene of the given size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    /// Places `drawable` centered at `pos`.
    pub fn place(&mut self, pos: Point, drawable: Drawable) {
        self.items.push(SceneItem { pos, drawable });
    }
}
