use ratatui::style::Color;
use thiserror::Error;

use crate::snake::Cell;

/// Default screen width in pixels.
pub const DEFAULT_SCREEN_WIDTH: u32 = 600;

/// Default screen height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;

/// Default edge length of one grid cell in pixels.
pub const DEFAULT_UNIT_SIZE: u32 = 25;

/// Tick interval in milliseconds driving the simulation.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Number of body cells a freshly started snake has.
pub const INITIAL_SNAKE_LENGTH: usize = 6;

/// Errors raised while deriving a grid from screen dimensions.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GridError {
    #[error("unit size must be greater than zero")]
    ZeroUnit,
    #[error("screen width {width}px is not a multiple of unit size {unit}px")]
    WidthNotMultiple { width: u32, unit: u32 },
    #[error("screen height {height}px is not a multiple of unit size {unit}px")]
    HeightNotMultiple { height: u32, unit: u32 },
    #[error("{cells} {axis} exceed the supported maximum of {}", u16::MAX)]
    TooManyCells { axis: &'static str, cells: u32 },
}

/// Logical board dimensions in cells, derived from screen pixels.
///
/// Validated once at startup and passed through the game, so no other code
/// repeats the pixels-to-cells arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    cols: u16,
    rows: u16,
}

impl Grid {
    /// Derives a grid from screen dimensions and a unit cell size.
    ///
    /// Both dimensions must be exact non-zero multiples of the unit size.
    pub fn from_screen(width: u32, height: u32, unit: u32) -> Result<Self, GridError> {
        if unit == 0 {
            return Err(GridError::ZeroUnit);
        }
        if width == 0 || width % unit != 0 {
            return Err(GridError::WidthNotMultiple { width, unit });
        }
        if height == 0 || height % unit != 0 {
            return Err(GridError::HeightNotMultiple { height, unit });
        }

        Ok(Self {
            cols: checked_cells(width / unit, "columns")?,
            rows: checked_cells(height / unit, "rows")?,
        })
    }

    /// Creates a grid directly from cell counts. Used by tests.
    #[must_use]
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        debug_assert!(cols > 0 && rows > 0);
        Self { cols, rows }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    /// Returns true when the cell lies inside the board.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < i32::from(self.cols)
            && cell.row < i32::from(self.rows)
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    /// Returns the center cell, where the snake's head starts.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            col: i32::from(self.cols / 2),
            row: i32::from(self.rows / 2),
        }
    }
}

fn checked_cells(cells: u32, axis: &'static str) -> Result<u16, GridError> {
    u16::try_from(cells).map_err(|_| GridError::TooManyCells { axis, cells })
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub score_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake, red food, black background.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::DarkGray,
    score_fg: Color::White,
    menu_title: Color::Red,
    menu_footer: Color::DarkGray,
};
