use rand::Rng;

use crate::config::Grid;
use crate::snake::{Cell, Snake};

/// Picks a food cell uniformly at random among all free cells.
///
/// Returns `None` when the snake covers the whole board, which the state
/// machine treats as a win. Enumerating candidates up front keeps the draw
/// uniform and bounded; there is no retry loop to get stuck in.
#[must_use]
pub fn spawn_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));

    for row in 0..i32::from(grid.rows()) {
        for col in 0..i32::from(grid.cols()) {
            let cell = Cell { col, row };
            if !snake.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::Grid;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::spawn_cell;

    #[test]
    fn food_never_spawns_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::from_cells(8, 6);
        let snake = Snake::from_cells(
            vec![
                Cell { col: 2, row: 0 },
                Cell { col: 1, row: 0 },
                Cell { col: 0, row: 0 },
            ],
            Direction::Right,
        );

        for _ in 0..200 {
            let cell = spawn_cell(&mut rng, grid, &snake).expect("board has free cells");
            assert!(grid.in_bounds(cell));
            assert!(!snake.occupies(cell));
        }
    }

    #[test]
    fn full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::from_cells(2, 2);
        let snake = Snake::from_cells(
            vec![
                Cell { col: 0, row: 0 },
                Cell { col: 1, row: 0 },
                Cell { col: 1, row: 1 },
                Cell { col: 0, row: 1 },
            ],
            Direction::Down,
        );

        assert_eq!(spawn_cell(&mut rng, grid, &snake), None);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::from_cells(2, 2);
        let snake = Snake::from_cells(
            vec![
                Cell { col: 0, row: 0 },
                Cell { col: 1, row: 0 },
                Cell { col: 1, row: 1 },
            ],
            Direction::Down,
        );

        for _ in 0..20 {
            assert_eq!(
                spawn_cell(&mut rng, grid, &snake),
                Some(Cell { col: 0, row: 1 })
            );
        }
    }
}
