use std::collections::VecDeque;

use crate::input::Direction;

/// One discrete grid position in cell coordinates.
///
/// Signed so a head that has just crossed an edge is representable; the
/// state machine rules on bounds, not the cell itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    /// Returns the neighboring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                col: self.col,
                row: self.row - 1,
            },
            Direction::Down => Self {
                col: self.col,
                row: self.row + 1,
            },
            Direction::Left => Self {
                col: self.col - 1,
                row: self.row,
            },
            Direction::Right => Self {
                col: self.col + 1,
                row: self.row,
            },
        }
    }
}

/// Ordered snake body with heading and growth bookkeeping.
///
/// Head at the front, tail at the back. The snake itself never rules on
/// bounds or self-collision; it only moves, grows, and steers.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
    grow: bool,
}

impl Snake {
    /// Creates a snake of `len` cells with its head at `head`, the body
    /// trailing in a straight line opposite `heading`.
    #[must_use]
    pub fn with_length(head: Cell, heading: Direction, len: usize) -> Self {
        debug_assert!(len >= 1);

        let mut body = VecDeque::with_capacity(len);
        let mut cell = head;
        for _ in 0..len {
            body.push_back(cell);
            cell = cell.step(heading.opposite());
        }

        Self {
            body,
            heading,
            pending_heading: None,
            grow: false,
        }
    }

    /// Creates a snake from explicit body cells (front is head). Used by tests.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>, heading: Direction) -> Self {
        debug_assert!(!cells.is_empty());
        Self {
            body: VecDeque::from(cells),
            heading,
            pending_heading: None,
            grow: false,
        }
    }

    /// Requests a heading change for the next tick.
    ///
    /// A reversal of the committed heading is silently ignored, so no
    /// sequence of requests between two ticks can turn the snake back into
    /// its own neck. Among valid requests, the last one before a tick wins.
    pub fn steer(&mut self, direction: Direction) {
        if direction == self.heading.opposite() {
            return;
        }
        self.pending_heading = Some(direction);
    }

    /// Queues growth to be applied on the next [`advance`](Self::advance).
    pub fn grow(&mut self) {
        self.grow = true;
    }

    /// Moves the snake one cell: commits the pending heading, pushes the new
    /// head, and drops the tail unless growth was queued.
    pub fn advance(&mut self) {
        if let Some(next) = self.pending_heading.take() {
            self.heading = next;
        }

        let new_head = self.head().step(self.heading);
        self.body.push_front(new_head);

        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body always holds at least one cell")
    }

    /// Returns true if any body cell occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head cell.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    /// Returns the current cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no cells. Never the case in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
