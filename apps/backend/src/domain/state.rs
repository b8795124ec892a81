//! The live game: score, grid and the active flag.

use serde::{Deserialize, Serialize};

use crate::domain::generator::{generate_grid, PairSource};
use crate::domain::grid::Grid;

/// The single live game: score, grid and whether clicks are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub score: u32,
    pub grid: Grid,
    pub is_active: bool,
}

impl GameState {
    /// Active game with score 0 on the given grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            score: 0,
            grid,
            is_active: true,
        }
    }

    /// Active game with score 0 on a freshly generated grid.
    pub fn new_game<S: PairSource + ?Sized>(source: &mut S) -> Self {
        Self::with_grid(generate_grid(source))
    }
}
