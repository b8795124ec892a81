//! Initial grid generation.
//!
//! Cells are filled in row-major order. Each cell draws uniformly random
//! (shape, color) pairs until one differs in both shape and color from the
//! cell above and the cell to the left (where those exist). After
//! [`GENERATION_MAX_ATTEMPTS`] failed draws on one cell the partial grid is
//! discarded and generation restarts from the first cell; a cell is never
//! accepted with a relaxed constraint.

use rand::Rng;
use tracing::{debug, warn};

use crate::domain::cell_types::{Appearance, Cell, Color, Shape};
use crate::domain::grid::{Grid, Position};
use crate::domain::rules::GENERATION_MAX_ATTEMPTS;

/// Source of candidate pairs for generation.
pub trait PairSource {
    fn draw(&mut self) -> Appearance;
}

/// Uniform draws over the full shape × color cross-product.
pub struct RandomPairs<'a, R: Rng + ?Sized>(pub &'a mut R);

impl<R: Rng + ?Sized> PairSource for RandomPairs<'_, R> {
    fn draw(&mut self) -> Appearance {
        let shape = Shape::ALL[self.0.random_range(0..Shape::ALL.len())];
        let color = Color::ALL[self.0.random_range(0..Color::ALL.len())];
        Appearance::new(shape, color)
    }
}

/// Generation-order check: only the neighbors already placed (above, left).
pub fn fits_generation_order(grid: &Grid, pos: Position, candidate: Appearance) -> bool {
    [pos.above(), pos.left()]
        .into_iter()
        .flatten()
        .all(|placed| grid[placed].appearance().differs_fully(candidate))
}

/// Generate a grid satisfying the top/left adjacency invariant.
pub fn generate_grid<S: PairSource + ?Sized>(source: &mut S) -> Grid {
    let mut restarts: u32 = 0;
    loop {
        match try_fill(source) {
            Some(grid) => {
                debug!(restarts, "Generated initial grid");
                return grid;
            }
            None => {
                restarts += 1;
                warn!(
                    restarts,
                    max_attempts = GENERATION_MAX_ATTEMPTS,
                    "Grid generation exhausted draws for a cell, restarting from scratch"
                );
            }
        }
    }
}

/// One full pass; `None` when some cell ran out of attempts.
fn try_fill<S: PairSource + ?Sized>(source: &mut S) -> Option<Grid> {
    // Every slot is overwritten in row-major order before anything reads it.
    let mut grid = Grid::filled(Cell::new(Shape::Triangle, Color::Red));

    for pos in Position::all() {
        let mut attempts: u32 = 0;
        let accepted = loop {
            if attempts == GENERATION_MAX_ATTEMPTS {
                return None;
            }
            attempts += 1;

            let candidate = source.draw();
            if fits_generation_order(&grid, pos, candidate) {
                break candidate;
            }
        };
        grid[pos] = Cell::from(accepted);
    }

    Some(grid)
}

/// Check the generation invariant over a whole grid.
pub fn satisfies_generation_invariant(grid: &Grid) -> bool {
    Position::all().all(|pos| fits_generation_order(grid, pos, grid[pos].appearance()))
}
