use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Apple type; a bonus apple is drawn differently.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AppleKind {
    Normal,
    Bonus,
}

/// Apple currently placed on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Cell,
    pub kind: AppleKind,
}

impl Apple {
    /// Creates a normal apple at `position`.
    #[must_use]
    pub fn normal(position: Cell) -> Self {
        Self {
            position,
            kind: AppleKind::Normal,
        }
    }

    /// Creates a bonus apple at `position`.
    #[must_use]
    pub fn bonus(position: Cell) -> Self {
        Self {
            position,
            kind: AppleKind::Bonus,
        }
    }

    #[must_use]
    pub fn is_bonus(self) -> bool {
        self.kind == AppleKind::Bonus
    }
}

/// How apple positions are drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Placement {
    /// Any cell of the grid, even one under the snake.
    Uniform,
    /// Any cell the snake does not occupy; uniform when none is free.
    AvoidSnake,
}

/// Draws a fresh apple of the requested kind.
#[must_use]
pub fn randomize<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    snake: &Snake,
    placement: Placement,
    bonus: bool,
) -> Apple {
    let position = match placement {
        Placement::Uniform => grid.random_cell(rng),
        Placement::AvoidSnake => {
            free_cell(rng, grid, snake).unwrap_or_else(|| grid.random_cell(rng))
        }
    };

    if bonus {
        Apple::bonus(position)
    } else {
        Apple::normal(position)
    }
}

/// Picks a uniformly random cell not occupied by the snake.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    let candidates: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();

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

    use crate::grid::Grid;
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{free_cell, randomize, AppleKind, Placement};

    fn row_snake(grid: Grid) -> Snake {
        Snake::from_segments(
            vec![grid.cell_at(2, 0), grid.cell_at(1, 0), grid.cell_at(0, 0)],
            Direction::Right,
            grid.cell_size(),
        )
        .expect("segments")
    }

    #[test]
    fn avoiding_placement_never_overlaps_snake() {
        let grid = Grid::new(8, 6, 10).expect("grid");
        let snake = row_snake(grid);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let apple = randomize(&mut rng, grid, &snake, Placement::AvoidSnake, false);
            assert!(!snake.occupies(apple.position));
            assert!(grid.is_within_bounds(apple.position));
        }
    }

    #[test]
    fn uniform_placement_stays_in_bounds() {
        let grid = Grid::new(3, 3, 16).expect("grid");
        let snake = row_snake(grid);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let apple = randomize(&mut rng, grid, &snake, Placement::Uniform, false);
            assert!(grid.is_within_bounds(apple.position));
        }
    }

    #[test]
    fn bonus_flag_sets_kind() {
        let grid = Grid::new(5, 5, 10).expect("grid");
        let snake = Snake::new(grid.start_cell(), grid.cell_size());
        let mut rng = StdRng::seed_from_u64(1);

        let bonus = randomize(&mut rng, grid, &snake, Placement::Uniform, true);
        let normal = randomize(&mut rng, grid, &snake, Placement::Uniform, false);

        assert_eq!(bonus.kind, AppleKind::Bonus);
        assert!(bonus.is_bonus());
        assert_eq!(normal.kind, AppleKind::Normal);
    }

    #[test]
    fn full_grid_has_no_free_cell() {
        let grid = Grid::new(3, 1, 10).expect("grid");
        let snake = row_snake(grid);
        let mut rng = StdRng::seed_from_u64(9);

        assert_eq!(free_cell(&mut rng, grid, &snake), None);

        let apple = randomize(&mut rng, grid, &snake, Placement::AvoidSnake, false);
        assert!(grid.is_within_bounds(apple.position));
        assert!(snake.occupies(apple.position));
    }
}
