//! Move-time adjacency validation.
//!
//! All four orthogonal neighbors are checked here. Generation uses its own
//! top/left check in [`crate::domain::generator`] because cells below and to
//! the right do not exist yet while the grid is being filled.

use crate::domain::cell_types::Appearance;
use crate::domain::grid::{Grid, Position};

/// Whether `candidate` may be placed at `pos` given the current neighbors.
///
/// False if any in-bounds neighbor shares the candidate's shape or color.
/// The cell at `pos` itself is not consulted.
pub fn is_legal(grid: &Grid, pos: Position, candidate: Appearance) -> bool {
    grid.neighbors(pos)
        .all(|neighbor| !neighbor.appearance().overlaps(candidate))
}
