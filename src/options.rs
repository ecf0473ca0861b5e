//! Game configuration options and the derived board layout.

use crate::geom::Point;

/// Base card width in pixels before scaling (standard cards are 25 x 35).
const CARD_BASE_WIDTH: i32 = 25;
/// Base card height in pixels before scaling.
const CARD_BASE_HEIGHT: i32 = 35;

/// Configuration options for a concentration game.
///
/// Every pixel dimension is derived from the single `scale` factor, and the
/// same derived values feed both hit-testing and rendering; a host that
/// draws a [`Scene`](crate::Scene) at these dimensions is guaranteed that
/// clicks land on the cards it drew.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use concentration::GameOptions;
///
/// let options = GameOptions::default().with_rows(2).with_cols(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of board rows.
    pub rows: u8,
    /// Number of board columns.
    pub cols: u8,
    /// Scale factor applied to every derived pixel dimension.
    pub scale: i32,
    /// Space in pixels between adjacent rows and columns.
    pub spacing: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 13,
            scale: 3,
            spacing: 20,
        }
    }
}

impl GameOptions {
    /// Sets the number of board rows.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_rows(2);
    /// assert_eq!(options.rows, 2);
    /// ```
    #[must_use]
    pub const fn with_rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of board columns.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_cols(6);
    /// assert_eq!(options.cols, 6);
    /// ```
    #[must_use]
    pub const fn with_cols(mut self, cols: u8) -> Self {
        self.cols = cols;
        self
    }

    /// Sets the scale factor.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_scale(2);
    /// assert_eq!(options.card_width(), 50);
    /// ```
    #[must_use]
    pub const fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the space between adjacent rows and columns.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::GameOptions;
    ///
    /// let options = GameOptions::default().with_spacing(10);
    /// assert_eq!(options.spacing, 10);
    /// ```
    #[must_use]
    pub const fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns the card width in pixels.
    #[must_use]
    pub const fn card_width(&self) -> i32 {
        CARD_BASE_WIDTH * self.scale
    }

    /// Returns the card height in pixels.
    #[must_use]
    pub const fn card_height(&self) -> i32 {
        CARD_BASE_HEIGHT * self.scale
    }

    /// Returns the offset of the board from the scene edges.
    #[must_use]
    pub const fn edge_offset(&self) -> i32 {
        self.scale * self.spacing
    }

    /// Returns the total scene width in pixels.
    #[must_use]
    pub const fn scene_width(&self) -> i32 {
        2 * self.edge_offset() + self.cols as i32 * (self.card_width() + self.spacing)
    }

    /// Returns the total scene height in pixels.
    ///
    /// Includes a strip three cards tall below the board where the result
    /// banner is shown.
    #[must_use]
    pub const fn scene_height(&self) -> i32 {
        2 * self.edge_offset()
            + 3 * self.card_height()
            + self.rows as i32 * (self.card_height() + self.spacing)
    }

    /// Returns the number of grid cells (`rows * cols`).
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns the number of pairs on a freshly dealt board.
    #[must_use]
    pub const fn pair_count(&self) -> u32 {
        self.cell_count() as u32 / 2
    }

    /// Returns the center of the grid cell at `row`, `col`.
    #[must_use]
    pub const fn cell_center(&self, row: u8, col: u8) -> Point {
        Point::new(
            col as i32 * (self.card_width() + self.spacing)
                + self.edge_offset()
                + self.card_width() / 2,
            row as i32 * (self.card_height() + self.spacing)
                + self.edge_offset()
                + self.card_height() / 2,
        )
    }
}
